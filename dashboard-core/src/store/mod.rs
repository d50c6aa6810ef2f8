//! The dashboard state container.
//!
//! `DashboardStore` owns every piece of UI state the mock views read: the
//! notification queue, the live quote table, the watchlist and the preference
//! flags. It is an ordinary value; callers that need to share it with the tick
//! driver wrap it with [`create_store`].

pub mod notifications;

use dashboard::model::notification::{Notification, NotificationDraft, NotificationId, NotificationKind};
use dashboard::model::preferences::{Language, Theme, UiPreferences};
use dashboard::model::quote::LiveQuotes;
use dashboard::model::watchlist::Watchlist;
use dashboard::Result;
use log::{debug, warn};
use notifications::NotificationQueue;
use std::sync::{Arc, Mutex, MutexGuard};

/// All client-side UI state, mutated only through the methods below.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    notifications: NotificationQueue,
    live_quotes: LiveQuotes,
    watchlist: Watchlist,
    preferences: UiPreferences,
}

impl DashboardStore {
    /// Creates a store with an empty notification queue and quote table.
    ///
    /// # Arguments
    ///
    /// * `watchlist` - Symbols to simulate, in display order.
    /// * `preferences` - Initial UI flags.
    pub fn new(watchlist: Watchlist, preferences: UiPreferences) -> Self {
        Self {
            notifications: NotificationQueue::new(),
            live_quotes: LiveQuotes::new(),
            watchlist,
            preferences,
        }
    }

    // --- Notifications ---

    /// Adds an unread notification at the head of the queue.
    ///
    /// The queue keeps at most 50 entries; the oldest ones are evicted first.
    pub fn add_notification(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.push_notification(NotificationDraft::new(kind, title, message))
    }

    /// Same as [`Self::add_notification`] but takes the kind as text.
    ///
    /// # Errors
    ///
    /// `DashboardError::InvalidNotificationKind` if `kind` is not one of the four
    /// known names. The queue is untouched in that case.
    pub fn add_notification_str(
        &mut self,
        kind: &str,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<NotificationId> {
        let kind: NotificationKind = kind.parse()?;
        Ok(self.add_notification(kind, title, message))
    }

    pub fn push_notification(&mut self, draft: NotificationDraft) -> NotificationId {
        debug!("Notification [{}] {}: {}", draft.kind, draft.title, draft.message);
        self.notifications.push(draft)
    }

    /// Marks one notification as read. Unknown ids are ignored.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> bool {
        let found = self.notifications.mark_read(id);
        if !found {
            debug!("mark_notification_read: no notification with id {}", id);
        }
        found
    }

    pub fn mark_all_notifications_read(&mut self) -> usize {
        self.notifications.mark_all_read()
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.get(id)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.unread_count()
    }

    // --- Live quotes ---

    /// Replaces the whole quote table. Symbols absent from `quotes` are gone afterwards.
    pub fn update_live_quotes(&mut self, quotes: LiveQuotes) {
        for (symbol, quote) in quotes.iter() {
            if quote.is_crossed() {
                warn!(
                    "Crossed quote for {}: bid {} > ask {}",
                    symbol, quote.bid, quote.ask
                );
            }
        }
        self.live_quotes = quotes;
    }

    pub fn live_quotes(&self) -> &LiveQuotes {
        &self.live_quotes
    }

    // --- Watchlist ---

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// Appends `symbol` to the watchlist; returns `false` if it was already there.
    pub fn add_to_watchlist(&mut self, symbol: &str) -> Result<bool> {
        self.watchlist.add(symbol)
    }

    /// Removes every occurrence of `symbol` from the watchlist.
    ///
    /// The quote table is left alone; the symbol drops out of it on the next tick.
    pub fn remove_from_watchlist(&mut self, symbol: &str) -> usize {
        self.watchlist.remove(symbol)
    }

    // --- UI preferences ---

    pub fn preferences(&self) -> &UiPreferences {
        &self.preferences
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.set_theme(theme);
    }

    pub fn set_theme_str(&mut self, theme: &str) -> Result<()> {
        self.preferences.set_theme(theme.parse()?);
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences.set_language(language);
    }

    pub fn set_language_str(&mut self, language: &str) -> Result<()> {
        self.preferences.set_language(language.parse()?);
        Ok(())
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.preferences.set_sidebar_collapsed(collapsed);
    }

    pub fn toggle_sidebar(&mut self) {
        self.preferences.toggle_sidebar();
    }

    pub fn set_command_palette_open(&mut self, open: bool) {
        self.preferences.set_command_palette_open(open);
    }

    pub fn toggle_command_palette(&mut self) {
        self.preferences.toggle_command_palette();
    }
}

/// A store shared between the views and the tick tasks.
pub type SharedStore = Arc<Mutex<DashboardStore>>;

pub fn create_store(store: DashboardStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Locks a shared store, recovering the guard if a previous holder panicked.
///
/// Each store operation is a single-field assignment, so a poisoned lock still
/// guards consistent data.
pub fn lock(store: &SharedStore) -> MutexGuard<'_, DashboardStore> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::model::quote::LiveQuote;
    use dashboard::DashboardError;

    fn store() -> DashboardStore {
        DashboardStore::new(
            Watchlist::from_symbols(["EURUSD", "GBPUSD"]).unwrap(),
            UiPreferences::default(),
        )
    }

    fn quotes(entries: &[(&str, LiveQuote)]) -> LiveQuotes {
        entries
            .iter()
            .map(|(s, q)| (s.to_string(), *q))
            .collect()
    }

    #[test]
    fn test_add_then_mark_read_scenario() {
        let mut store = store();
        let id = store.add_notification(NotificationKind::Success, "Analysis Complete", "Done");

        assert_eq!(store.notifications().len(), 1);
        let n = store.notification(id).unwrap();
        assert_eq!(n.kind(), NotificationKind::Success);
        assert_eq!(n.title(), "Analysis Complete");
        assert_eq!(n.message(), "Done");
        assert!(!n.is_read());

        assert!(store.mark_notification_read(id));
        assert_eq!(store.notifications().len(), 1);
        assert!(store.notification(id).unwrap().is_read());
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_fifty_one_notifications_evict_first() {
        let mut store = store();
        for n in 0..=50 {
            store.add_notification(NotificationKind::Info, format!("N{}", n), "tick");
        }

        let queue = store.notifications();
        assert_eq!(queue.len(), 50);
        assert_eq!(queue.iter().next().unwrap().title(), "N50");
        assert_eq!(queue.iter().last().unwrap().title(), "N1");
        assert!(!queue.iter().any(|n| n.title() == "N0"));
    }

    #[test]
    fn test_add_notification_str_validates_kind() {
        let mut store = store();
        assert!(store.add_notification_str("warning", "Spread", "Wide").is_ok());

        let err = store.add_notification_str("urgent", "Bad", "Kind").unwrap_err();
        assert_eq!(err, DashboardError::InvalidNotificationKind("urgent".into()));
        assert_eq!(store.notifications().len(), 1);
    }

    #[test]
    fn test_update_live_quotes_overwrites() {
        let mut store = store();
        let q1 = LiveQuote::new(1.0850, 1.0851, 0.0001);
        let q2 = LiveQuote::new(1.2650, 1.2651, -0.0002);

        store.update_live_quotes(quotes(&[("A", q1)]));
        store.update_live_quotes(quotes(&[("B", q2)]));

        let table = store.live_quotes();
        assert_eq!(table.len(), 1);
        assert!(!table.contains("A"));
        assert_eq!(table.get("B"), Some(&q2));
    }

    #[test]
    fn test_update_live_quotes_exact_values() {
        let mut store = store();
        store.update_live_quotes(quotes(&[(
            "EURUSD",
            LiveQuote::new(1.0850, 1.0851, 0.0001),
        )]));

        let table = store.live_quotes();
        assert_eq!(table.symbols(), vec!["EURUSD"]);
        let q = table.get("EURUSD").unwrap();
        assert_eq!(q.bid, 1.0850);
        assert_eq!(q.ask, 1.0851);
        assert_eq!(q.change, 0.0001);
    }

    #[test]
    fn test_crossed_quote_is_stored_as_given() {
        let mut store = store();
        store.update_live_quotes(quotes(&[("EURUSD", LiveQuote::new(1.1, 1.0, 0.0))]));
        assert!(store.live_quotes().get("EURUSD").unwrap().is_crossed());
    }

    #[test]
    fn test_watchlist_operations() {
        let mut store = store();
        assert_eq!(store.add_to_watchlist("usdjpy"), Ok(true));
        assert_eq!(store.add_to_watchlist("EURUSD"), Ok(false));
        assert_eq!(store.remove_from_watchlist("GBPUSD"), 1);
        assert_eq!(store.watchlist().as_slice(), &["EURUSD", "USDJPY"]);
    }

    #[test]
    fn test_preference_setters() {
        let mut store = store();
        store.set_theme(Theme::Pro);
        store.set_language_str("ar").unwrap();
        store.toggle_command_palette();
        store.set_sidebar_collapsed(true);

        let prefs = store.preferences();
        assert_eq!(prefs.theme(), Theme::Pro);
        assert_eq!(prefs.language(), Language::Ar);
        assert!(prefs.command_palette_open());
        assert!(prefs.sidebar_collapsed());

        assert!(store.set_theme_str("neon").is_err());
        assert_eq!(store.preferences().theme(), Theme::Pro);
    }

    #[test]
    fn test_shared_store_lock() {
        let shared = create_store(store());
        lock(&shared).add_notification(NotificationKind::Error, "Feed", "Stalled");
        assert_eq!(lock(&shared).notifications().len(), 1);
    }
}
