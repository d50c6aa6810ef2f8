//! The ordered list of symbols the dashboard simulates and displays.

use crate::error::{DashboardError, Result};
use crate::model::quote::Symbol;
use serde::{Deserialize, Serialize};

/// Ordered set of symbols. Insertion order is display order.
///
/// Symbols are normalized (trimmed, upper-cased) and never duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    symbols: Vec<Symbol>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a watchlist from raw symbols, skipping duplicates.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidSymbol` for the first empty symbol.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut watchlist = Self::new();
        for symbol in symbols {
            watchlist.add(symbol.as_ref())?;
        }
        Ok(watchlist)
    }

    /// Appends a symbol unless it is already tracked.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the symbol was appended.
    /// * `Ok(false)` if it was already present.
    /// * `Err` if the symbol is empty.
    pub fn add(&mut self, symbol: &str) -> Result<bool> {
        let symbol = normalize(symbol)?;
        if self.symbols.contains(&symbol) {
            return Ok(false);
        }
        self.symbols.push(symbol);
        Ok(true)
    }

    /// Removes every occurrence of `symbol`, returning how many were dropped.
    pub fn remove(&mut self, symbol: &str) -> usize {
        let target = symbol.trim().to_uppercase();
        let before = self.symbols.len();
        self.symbols.retain(|s| *s != target);
        before - self.symbols.len()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        let target = symbol.trim().to_uppercase();
        self.symbols.iter().any(|s| *s == target)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

fn normalize(symbol: &str) -> Result<Symbol> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(DashboardError::InvalidSymbol(symbol.to_string()));
    }
    Ok(trimmed.to_uppercase())
}
