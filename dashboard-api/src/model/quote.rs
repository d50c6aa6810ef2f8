//! Live quote models.
//!
//! `LiveQuotes` is always a complete snapshot: the store replaces it as a whole
//! on every tick and never merges two snapshots together.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Currency pair identifier, e.g. "EURUSD".
pub type Symbol = String;

/// The latest simulated prices for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveQuote {
    /// The best bid price.
    pub bid: f64,
    /// The best ask price.
    pub ask: f64,
    /// Signed fractional change applied on this tick.
    pub change: f64,
}

impl LiveQuote {
    pub fn new(bid: f64, ask: f64, change: f64) -> Self {
        Self { bid, ask, change }
    }

    pub fn get_bid(&self) -> f64 {
        self.bid
    }

    pub fn get_ask(&self) -> f64 {
        self.ask
    }

    pub fn get_change(&self) -> f64 {
        self.change
    }

    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// True when the bid sits above the ask. Nothing prevents storing such a quote.
    pub fn is_crossed(&self) -> bool {
        self.bid > self.ask
    }
}

/// A full quote snapshot keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiveQuotes {
    quotes: HashMap<Symbol, LiveQuote>,
}

impl LiveQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<Symbol>, quote: LiveQuote) {
        self.quotes.insert(symbol.into(), quote);
    }

    pub fn get(&self, symbol: &str) -> Option<&LiveQuote> {
        self.quotes.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.quotes.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Symbols in sorted order, for stable display and logging.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.quotes.keys().map(|s| s.as_str()).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, Symbol, LiveQuote> {
        self.quotes.iter()
    }
}

impl FromIterator<(Symbol, LiveQuote)> for LiveQuotes {
    fn from_iter<I: IntoIterator<Item = (Symbol, LiveQuote)>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<Symbol, LiveQuote>> for LiveQuotes {
    fn from(quotes: HashMap<Symbol, LiveQuote>) -> Self {
        Self { quotes }
    }
}
