//! Mock data generators.
//!
//! Each generator owns its own RNG and state. None of them shares a source of
//! truth with another: the quote feed, the alert feed and the position
//! simulator can disagree and that is expected.

pub mod alerts;
pub mod positions;
pub mod quotes;

pub use alerts::RandomAlertFeed;
pub use positions::{demo_positions, MockPosition, PositionSimulator};
pub use quotes::{default_base_prices, synthesize_quote, RandomQuoteFeed};
