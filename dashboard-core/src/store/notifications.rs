//! Bounded, newest-first notification queue.

use chrono::Utc;
use dashboard::model::notification::{Notification, NotificationDraft, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications kept in memory.
pub const NOTIFICATION_CAPACITY: usize = 50;

/// Newest entry at index 0. Inserting past capacity evicts from the back.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    capacity: usize,
    next_id: NotificationId,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_capacity(NOTIFICATION_CAPACITY)
    }

    /// Creates a queue with a custom cap. A cap of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 1,
        }
    }

    /// Prepends a new unread notification and trims the queue to capacity.
    ///
    /// # Returns
    ///
    /// The id assigned to the new entry.
    pub fn push(&mut self, draft: NotificationDraft) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push_front(Notification::new(id, draft, Utc::now()));
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                log::trace!("Evicted notification {} ({})", evicted.id(), evicted.title());
            }
        }
        id
    }

    /// Marks a single entry as read.
    ///
    /// Returns `false` (and changes nothing) when no entry has that id.
    pub fn mark_read(&mut self, id: NotificationId) -> bool {
        match self.entries.iter_mut().find(|n| n.id() == id) {
            Some(entry) => {
                entry.mark_read();
                true
            }
            None => false,
        }
    }

    /// Marks every entry as read, returning how many flipped.
    pub fn mark_all_read(&mut self) -> usize {
        let mut flipped = 0;
        for entry in self.entries.iter_mut().filter(|n| !n.is_read()) {
            entry.mark_read();
            flipped += 1;
        }
        flipped
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.is_read()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates newest first.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Notification> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::model::notification::NotificationKind;

    fn draft(title: &str) -> NotificationDraft {
        NotificationDraft::new(NotificationKind::Info, title, "body")
    }

    fn titles(queue: &NotificationQueue) -> Vec<String> {
        queue.iter().map(|n| n.title().to_string()).collect()
    }

    #[test]
    fn test_length_never_exceeds_cap() {
        let mut queue = NotificationQueue::new();
        for n in 1..=120 {
            queue.push(draft(&format!("N{}", n)));
            assert_eq!(queue.len(), n.min(NOTIFICATION_CAPACITY));
        }
    }

    #[test]
    fn test_eviction_drops_oldest_and_keeps_order() {
        let mut queue = NotificationQueue::new();
        for n in 0..NOTIFICATION_CAPACITY {
            queue.push(draft(&format!("N{}", n)));
        }
        let before = titles(&queue);
        assert_eq!(before.last().map(String::as_str), Some("N0"));

        queue.push(draft("overflow"));
        let after = titles(&queue);

        assert_eq!(after.len(), NOTIFICATION_CAPACITY);
        assert_eq!(after[0], "overflow");
        // The 49 survivors keep their relative order, shifted by one.
        assert_eq!(&after[1..], &before[..NOTIFICATION_CAPACITY - 1]);
        assert!(!after.iter().any(|t| t == "N0"));
    }

    #[test]
    fn test_newest_first() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(draft("A"));
        let b = queue.push(draft("B"));

        let ids: Vec<_> = queue.iter().map(|n| n.id()).collect();
        let pos_a = ids.iter().position(|&id| id == a).unwrap();
        let pos_b = ids.iter().position(|&id| id == b).unwrap();
        assert!(pos_b < pos_a);
        assert_eq!(queue.latest().map(|n| n.id()), Some(b));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut queue = NotificationQueue::with_capacity(3);
        let ids: Vec<_> = (0..10).map(|i| queue.push(draft(&i.to_string()))).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mark_read_touches_only_target() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(draft("first"));
        let second = queue.push(draft("second"));
        let third = queue.push(draft("third"));
        let snapshot = queue.clone();

        assert!(queue.mark_read(second));

        for n in queue.iter() {
            let old = snapshot.get(n.id()).unwrap();
            assert_eq!(n.title(), old.title());
            assert_eq!(n.message(), old.message());
            assert_eq!(n.timestamp(), old.timestamp());
            assert_eq!(n.kind(), old.kind());
        }
        assert!(queue.get(second).unwrap().is_read());
        assert!(!queue.get(first).unwrap().is_read());
        assert!(!queue.get(third).unwrap().is_read());
        assert_eq!(queue.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_unknown_id_is_noop() {
        let mut queue = NotificationQueue::new();
        queue.push(draft("one"));
        queue.push(draft("two"));
        let snapshot = queue.clone();

        assert!(!queue.mark_read(9_999));
        assert_eq!(queue, snapshot);
    }

    #[test]
    fn test_mark_all_read() {
        let mut queue = NotificationQueue::new();
        let id = queue.push(draft("one"));
        queue.push(draft("two"));
        queue.push(draft("three"));
        queue.mark_read(id);

        assert_eq!(queue.mark_all_read(), 2);
        assert_eq!(queue.unread_count(), 0);
        assert_eq!(queue.mark_all_read(), 0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut queue = NotificationQueue::with_capacity(0);
        queue.push(draft("a"));
        queue.push(draft("b"));
        assert_eq!(queue.capacity(), 1);
        assert_eq!(titles(&queue), vec!["b"]);
    }
}
