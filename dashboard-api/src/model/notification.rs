//! User-facing notification records.
//!
//! A `Notification` is created by the store (which owns id assignment); producers
//! only ever hand over a `NotificationDraft`.

use crate::error::DashboardError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monotonically assigned notification identifier.
pub type NotificationId = u64;

/// Severity/category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Warning,
        NotificationKind::Error,
        NotificationKind::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(NotificationKind::Success),
            "warning" => Ok(NotificationKind::Warning),
            "error" => Ok(NotificationKind::Error),
            "info" => Ok(NotificationKind::Info),
            other => Err(DashboardError::InvalidNotificationKind(other.to_string())),
        }
    }
}

/// The producer-side half of a notification: what to say, not when or under which id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl NotificationDraft {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A notification as held by the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    title: String,
    message: String,
    timestamp: DateTime<Utc>,
    read: bool,
}

impl Notification {
    /// Creates a new, unread notification.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier assigned by the owning queue.
    /// * `draft` - Kind, title and message.
    /// * `timestamp` - Creation instant.
    pub fn new(id: NotificationId, draft: NotificationDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: draft.kind,
            title: draft.title,
            message: draft.message,
            timestamp,
            read: false,
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Flips the read flag on. There is no way back to unread.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
