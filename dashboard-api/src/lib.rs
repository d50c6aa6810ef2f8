//! # Dashboard API
//!
//! Domain types shared by the dashboard state container and the mock feeds.
//!
//! ## Modules
//! - `model`: Notifications, live quotes, the watchlist and UI preferences.
//! - `traits`: The contracts mock generators implement (`QuoteSource`, `AlertSource`).
//! - `error`: The domain error type returned at parsing boundaries.

pub mod error;
pub mod model;
pub mod traits;

pub use error::{DashboardError, Result};
pub use model::notification::{Notification, NotificationDraft, NotificationId, NotificationKind};
pub use model::preferences::{Language, Theme, UiPreferences};
pub use model::quote::{LiveQuote, LiveQuotes, Symbol};
pub use model::watchlist::Watchlist;
pub use traits::alert_source::AlertSource;
pub use traits::quote_source::QuoteSource;

pub mod prelude {
    pub use crate::error::DashboardError;
    pub use crate::model::notification::{Notification, NotificationDraft, NotificationKind};
    pub use crate::model::quote::{LiveQuote, LiveQuotes};
    pub use crate::model::watchlist::Watchlist;
    pub use crate::traits::alert_source::AlertSource;
    pub use crate::traits::quote_source::QuoteSource;
}
