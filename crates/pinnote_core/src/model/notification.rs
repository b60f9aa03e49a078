//! Transient notifications raised by list mutations.

use serde::Serialize;
use uuid::Uuid;

/// How long a notification stays visible before it auto-closes.
pub const AUTO_CLOSE_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// One toast-style message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Handle used to dismiss this notification early.
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub auto_close_ms: u32,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            auto_close_ms: AUTO_CLOSE_MS,
        }
    }
}
