//! The mock tick driver.
//!
//! Two independent tickers feed a [`SharedStore`]: one replaces the live quote
//! table from a [`QuoteSource`], the other occasionally adds a notification from
//! an [`AlertSource`]. Nothing orders one ticker relative to the other.

pub mod ticker;

use crate::store::{lock, SharedStore};
use anyhow::Result;
use dashboard::model::notification::NotificationId;
use dashboard::traits::alert_source::AlertSource;
use dashboard::traits::quote_source::QuoteSource;
use log::{debug, info};
use std::time::Duration;
pub use ticker::{TickHandle, Ticker};

/// Runs one quote tick: snapshot the watchlist, generate, replace the table.
///
/// The store lock is not held while the source generates.
pub fn apply_quote_tick<S: QuoteSource + ?Sized>(store: &SharedStore, source: &mut S) {
    let watchlist = lock(store).watchlist().clone();
    let quotes = source.next_quotes(&watchlist);
    debug!("Quote tick: {} symbols", quotes.len());
    lock(store).update_live_quotes(quotes);
}

/// Runs one alert tick against the current quote table.
///
/// # Returns
///
/// The id of the added notification, if the source produced one.
pub fn apply_alert_tick<A: AlertSource + ?Sized>(
    store: &SharedStore,
    source: &mut A,
) -> Option<NotificationId> {
    let quotes = lock(store).live_quotes().clone();
    let draft = source.next_alert(&quotes)?;
    Some(lock(store).push_notification(draft))
}

/// Cadence of the two tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSettings {
    pub quote_interval: Duration,
    pub alert_interval: Duration,
    /// Stop the quote ticker after this many ticks. `None` runs until stopped.
    pub quote_tick_limit: Option<u64>,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            quote_interval: Duration::from_secs(1),
            alert_interval: Duration::from_secs(3),
            quote_tick_limit: None,
        }
    }
}

/// Spawns the quote ticker alone.
pub fn spawn_quote_ticker<S>(
    store: SharedStore,
    mut source: S,
    period: Duration,
    limit: Option<u64>,
) -> TickHandle
where
    S: QuoteSource + Send + 'static,
{
    let mut ticker = Ticker::new("quotes", period);
    if let Some(limit) = limit {
        ticker = ticker.with_limit(limit);
    }
    ticker.spawn(move || apply_quote_tick(&store, &mut source))
}

/// Spawns the alert ticker alone.
pub fn spawn_alert_ticker<A>(store: SharedStore, mut source: A, period: Duration) -> TickHandle
where
    A: AlertSource + Send + 'static,
{
    Ticker::new("alerts", period).spawn(move || {
        if let Some(id) = apply_alert_tick(&store, &mut source) {
            debug!("Alert tick added notification {}", id);
        }
    })
}

/// Both tickers, started together and stopped together.
pub struct MockTickDriver {
    quotes: TickHandle,
    alerts: TickHandle,
}

impl MockTickDriver {
    /// Starts both tickers on the current tokio runtime.
    pub fn start<S, A>(
        store: SharedStore,
        quote_source: S,
        alert_source: A,
        settings: DriverSettings,
    ) -> Self
    where
        S: QuoteSource + Send + 'static,
        A: AlertSource + Send + 'static,
    {
        info!(
            "Starting mock tick driver (quotes every {:?}, alerts every {:?})",
            settings.quote_interval, settings.alert_interval
        );
        let quotes = spawn_quote_ticker(
            store.clone(),
            quote_source,
            settings.quote_interval,
            settings.quote_tick_limit,
        );
        let alerts = spawn_alert_ticker(store, alert_source, settings.alert_interval);
        Self { quotes, alerts }
    }

    /// True once the quote ticker has exhausted its limit.
    pub fn quotes_finished(&self) -> bool {
        self.quotes.is_finished()
    }

    /// Stops both tickers and waits for them.
    ///
    /// # Returns
    ///
    /// `(quote_ticks, alert_ticks)`.
    pub async fn stop(self) -> Result<(u64, u64)> {
        let quote_ticks = self.quotes.stop().await?;
        let alert_ticks = self.alerts.stop().await?;
        Ok((quote_ticks, alert_ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{create_store, DashboardStore};
    use dashboard::model::notification::{NotificationDraft, NotificationKind};
    use dashboard::model::preferences::UiPreferences;
    use dashboard::model::quote::{LiveQuote, LiveQuotes};
    use dashboard::model::watchlist::Watchlist;

    struct FixedSource;

    impl QuoteSource for FixedSource {
        fn next_quotes(&mut self, watchlist: &Watchlist) -> LiveQuotes {
            watchlist
                .iter()
                .map(|s| (s.clone(), LiveQuote::new(1.0, 1.0001, 0.0)))
                .collect()
        }
    }

    struct AlwaysAlert;

    impl AlertSource for AlwaysAlert {
        fn next_alert(&mut self, quotes: &LiveQuotes) -> Option<NotificationDraft> {
            Some(NotificationDraft::new(
                NotificationKind::Info,
                "Tick",
                format!("{} quotes", quotes.len()),
            ))
        }
    }

    fn shared(symbols: &[&str]) -> SharedStore {
        create_store(DashboardStore::new(
            Watchlist::from_symbols(symbols.iter().copied()).unwrap(),
            UiPreferences::default(),
        ))
    }

    #[test]
    fn test_quote_tick_follows_watchlist() {
        let store = shared(&["EURUSD", "GBPUSD"]);
        apply_quote_tick(&store, &mut FixedSource);
        assert_eq!(lock(&store).live_quotes().symbols(), vec!["EURUSD", "GBPUSD"]);

        lock(&store).remove_from_watchlist("EURUSD");
        apply_quote_tick(&store, &mut FixedSource);
        assert_eq!(lock(&store).live_quotes().symbols(), vec!["GBPUSD"]);
    }

    #[test]
    fn test_alert_tick_adds_notification() {
        let store = shared(&["EURUSD"]);
        apply_quote_tick(&store, &mut FixedSource);

        let id = apply_alert_tick(&store, &mut AlwaysAlert).unwrap();
        let guard = lock(&store);
        let n = guard.notification(id).unwrap();
        assert_eq!(n.message(), "1 quotes");
        assert!(!n.is_read());
    }

    #[tokio::test]
    async fn test_driver_runs_and_stops() -> Result<()> {
        let store = shared(&["EURUSD"]);
        let settings = DriverSettings {
            quote_interval: Duration::from_millis(5),
            alert_interval: Duration::from_millis(5),
            quote_tick_limit: None,
        };

        let driver = MockTickDriver::start(store.clone(), FixedSource, AlwaysAlert, settings);
        tokio::time::sleep(Duration::from_millis(60)).await;
        let (quote_ticks, alert_ticks) = driver.stop().await?;

        assert!(quote_ticks > 0);
        assert!(alert_ticks > 0);
        let count = lock(&store).notifications().len();
        assert_eq!(count as u64, alert_ticks.min(50));
        Ok(())
    }
}
