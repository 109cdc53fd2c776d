//! Notification model
//!
//! Short advisory messages raised by the engine, mostly for budget breaches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An advisory message surfaced to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// The notification message
    pub message: String,

    /// When the notification was raised
    pub timestamp: DateTime<Utc>,

    /// Read flag; nothing clears it yet
    #[serde(default)]
    pub is_read: bool,
}

impl Notification {
    /// Create an unread notification stamped now
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
            is_read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unread() {
        let before = Utc::now();
        let n = Notification::new("hello");
        assert_eq!(n.message, "hello");
        assert!(!n.is_read);
        assert!(n.timestamp >= before);
    }
}
