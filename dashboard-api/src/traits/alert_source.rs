//! Defines the `AlertSource` trait for notification synthesis.

use crate::model::notification::NotificationDraft;
use crate::model::quote::LiveQuotes;

/// A trait for components that occasionally turn market state into a notification.
pub trait AlertSource {
    /// Called once per alert tick with the current quote table.
    ///
    /// # Returns
    ///
    /// * `Some(draft)` - A notification to add to the queue.
    /// * `None` - Nothing worth reporting on this tick.
    fn next_alert(&mut self, quotes: &LiveQuotes) -> Option<NotificationDraft>;
}
