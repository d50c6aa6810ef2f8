//! Runs the mock dashboard feeds against an in-memory store.
//!
//! Quotes and notifications are synthesized locally and logged; nothing is
//! persisted and nothing leaves the process. Useful to eyeball the generators
//! and the tick cadence without a UI attached.

use anyhow::Result;
use dashboard_core::args::CommonArgs;
use dashboard_core::config::DashboardConfig;
use dashboard_core::driver::{MockTickDriver, Ticker};
use dashboard_core::simulation::{
    demo_positions, PositionSimulator, RandomAlertFeed, RandomQuoteFeed,
};
use dashboard_core::store::{create_store, lock, DashboardStore, SharedStore};
use log::info;

/// Logs the current quote table and notification count.
fn report(store: &SharedStore) {
    let guard = lock(store);
    let quotes = guard.live_quotes();
    for symbol in quotes.symbols() {
        if let Some(q) = quotes.get(symbol) {
            info!(
                "{:<8} bid {:>10.5}  ask {:>10.5}  chg {:+.5}",
                symbol, q.bid, q.ask, q.change
            );
        }
    }
    if let Some(latest) = guard.notifications().latest() {
        info!(
            "{} notifications ({} unread), latest: [{}] {}",
            guard.notifications().len(),
            guard.unread_count(),
            latest.kind(),
            latest.title()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dashboard_core::init_logger();
    info!("=== Dummy Feed Starting ===");

    // 1. Configuration: file first, then CLI overrides
    let args = CommonArgs::parse_args(std::env::args().collect());
    let mut config = DashboardConfig::load(&args.get_config_dir())?;
    config.apply_args(&args)?;

    // 2. Store
    let store = create_store(DashboardStore::new(
        config.watchlist()?,
        config.preferences(),
    ));
    {
        let guard = lock(&store);
        info!(
            "Watchlist: {:?} | theme {} | language {}",
            guard.watchlist().as_slice(),
            guard.preferences().theme(),
            guard.preferences().language()
        );
    }

    // 3. Generators
    let base_prices = config.base_prices();
    let (quote_feed, alert_feed, positions) = match args.get_seed() {
        Some(seed) => (
            RandomQuoteFeed::seeded(base_prices, seed),
            RandomAlertFeed::seeded(config.alert_probability(), seed.wrapping_add(1)),
            PositionSimulator::seeded(demo_positions(), seed.wrapping_add(2)),
        ),
        None => (
            RandomQuoteFeed::from_base_prices(base_prices),
            RandomAlertFeed::new(config.alert_probability()),
            PositionSimulator::demo(),
        ),
    };

    // 4. Tickers
    let driver = MockTickDriver::start(
        store.clone(),
        quote_feed,
        alert_feed,
        config.driver_settings(args.get_tick_limit()),
    );

    // Positions drift on their own; they never read the quote table.
    let mut positions = positions;
    let position_ticker = Ticker::new("positions", config.alert_interval()).spawn(move || {
        positions.tick();
        info!("Mock positions P&L: {:+.2}", positions.total_pnl());
    });

    let report_store = store.clone();
    let reporter = Ticker::new("report", config.quote_interval() * 5)
        .spawn(move || report(&report_store));

    // 5. Run until Ctrl-C or until the quote ticker exhausts its limit
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, shutting down.");
                break;
            }
            _ = tokio::time::sleep(config.quote_interval()) => {
                if driver.quotes_finished() {
                    info!("Tick limit reached, shutting down.");
                    break;
                }
            }
        }
    }

    // 6. Teardown
    reporter.stop().await?;
    position_ticker.stop().await?;
    let (quote_ticks, alert_ticks) = driver.stop().await?;
    report(&store);
    info!(
        "Dummy feed exited after {} quote ticks and {} alert ticks",
        quote_ticks, alert_ticks
    );
    Ok(())
}
