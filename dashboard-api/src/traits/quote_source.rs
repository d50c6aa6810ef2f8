//! Defines the `QuoteSource` trait for quote snapshot generation.
//!
//! The tick driver polls a `QuoteSource` once per quote tick and hands the
//! result to the store, which replaces its live quote table with it. Sources
//! may be synthetic (random walks, fixed fixtures) or, in principle, adapters
//! over a real feed; the driver does not care which.

use crate::model::quote::LiveQuotes;
use crate::model::watchlist::Watchlist;

/// A trait for components that produce complete quote snapshots.
///
/// # Examples
///
/// ```
/// use dashboard::model::quote::{LiveQuote, LiveQuotes};
/// use dashboard::model::watchlist::Watchlist;
/// use dashboard::traits::quote_source::QuoteSource;
///
/// struct FlatSource;
///
/// impl QuoteSource for FlatSource {
///     fn next_quotes(&mut self, watchlist: &Watchlist) -> LiveQuotes {
///         watchlist
///             .iter()
///             .map(|s| (s.clone(), LiveQuote::new(1.0, 1.0001, 0.0)))
///             .collect()
///     }
/// }
/// ```
pub trait QuoteSource {
    /// Produces the next snapshot for every symbol in `watchlist`.
    ///
    /// The returned map must be complete: symbols missing from it disappear
    /// from the live table once the store applies it.
    fn next_quotes(&mut self, watchlist: &Watchlist) -> LiveQuotes;
}
