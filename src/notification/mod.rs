// Change detection, notification log and ephemeral alerts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod config;
mod detector;
mod log;
mod notifier;

pub use config::NotificationConfig;
pub use detector::{detect_transitions, Transition};
pub use log::NotificationLog;
pub use notifier::Notifier;

#[cfg(test)]
mod tests;

/// Severity/category of a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

/// Logged, user-visible record of a qualifying transition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// UUIDv7 identifier (time-ordered)
    pub id: String,

    pub title: String,

    pub message: String,

    #[serde(rename = "type")]
    pub kind: NotificationKind,

    /// Creation time
    pub timestamp: DateTime<Utc>,

    pub read: bool,
}

/// Notification content before it is stamped and logged
#[derive(Clone, Debug, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    /// Assign id and timestamp; new notifications start unread
    pub fn into_notification(self) -> Notification {
        Notification {
            id: Uuid::now_v7().to_string(),
            title: self.title,
            message: self.message,
            kind: self.kind,
            timestamp: Utc::now(),
            read: false,
        }
    }
}

/// Ephemeral toast surfaced immediately to connected users, never stored
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
