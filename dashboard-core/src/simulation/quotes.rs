//! Random quote generator.
//!
//! Every tick is computed from the static base price alone; there is no walk
//! and no memory of the previous tick.

use dashboard::model::quote::{LiveQuote, LiveQuotes};
use dashboard::model::watchlist::Watchlist;
use dashboard::traits::quote_source::QuoteSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Largest absolute change applied to a base price on a single tick.
pub const MAX_CHANGE: f64 = 0.001;

/// Spread as a fraction of the base price.
pub const SPREAD_FACTOR: f64 = 0.0001;

/// Price used for symbols missing from the base table.
pub const FALLBACK_BASE_PRICE: f64 = 1.0;

/// Built-in base prices for the majors and a couple of crosses.
pub fn default_base_prices() -> HashMap<String, f64> {
    [
        ("EURUSD", 1.0850),
        ("GBPUSD", 1.2650),
        ("USDJPY", 149.50),
        ("AUDUSD", 0.6550),
        ("USDCHF", 0.8850),
        ("USDCAD", 1.3550),
        ("NZDUSD", 0.6050),
        ("EURGBP", 0.8580),
    ]
    .into_iter()
    .map(|(symbol, price)| (symbol.to_string(), price))
    .collect()
}

/// Builds one quote from a base price and the tick's change.
///
/// `bid = base + change`, `ask = bid + base * SPREAD_FACTOR`.
pub fn synthesize_quote(base: f64, change: f64) -> LiveQuote {
    let bid = base + change;
    let ask = bid + base * SPREAD_FACTOR;
    LiveQuote::new(bid, ask, change)
}

/// Produces a fresh quote for every watchlist symbol on each call.
pub struct RandomQuoteFeed<R: Rng = StdRng> {
    base_prices: HashMap<String, f64>,
    rng: R,
}

impl RandomQuoteFeed<StdRng> {
    /// Creates a feed over the built-in base table, seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_base_prices(default_base_prices())
    }

    /// Creates a feed over a custom base table, seeded from OS entropy.
    pub fn from_base_prices(base_prices: HashMap<String, f64>) -> Self {
        Self::with_base_prices(base_prices, StdRng::from_entropy())
    }

    /// Creates a deterministic feed; identical seeds yield identical ticks.
    pub fn seeded(base_prices: HashMap<String, f64>, seed: u64) -> Self {
        Self::with_base_prices(base_prices, StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomQuoteFeed<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomQuoteFeed<R> {
    pub fn with_base_prices(base_prices: HashMap<String, f64>, rng: R) -> Self {
        Self { base_prices, rng }
    }

    pub fn base_price(&self, symbol: &str) -> f64 {
        self.base_prices
            .get(symbol)
            .copied()
            .unwrap_or(FALLBACK_BASE_PRICE)
    }
}

impl<R: Rng> QuoteSource for RandomQuoteFeed<R> {
    fn next_quotes(&mut self, watchlist: &Watchlist) -> LiveQuotes {
        let mut quotes = LiveQuotes::new();
        for symbol in watchlist {
            let base = self.base_price(symbol);
            let change = self.rng.gen_range(-MAX_CHANGE..=MAX_CHANGE);
            quotes.insert(symbol.clone(), synthesize_quote(base, change));
        }
        quotes
    }
}
