//! In-memory notification log
//!
//! A bounded queue: once full, pushing a new notification drops the oldest.

use std::collections::vec_deque::Iter;
use std::collections::VecDeque;

use tracing::debug;

use crate::models::{truncate_chars, Notification};

/// Bounded, oldest-first log of notifications
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
    max_message_length: usize,
}

impl NotificationLog {
    /// Create an empty log; a zero capacity is treated as one
    ///
    /// `capacity` is only the eviction bound; storage grows as entries arrive.
    pub fn new(capacity: usize, max_message_length: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            max_message_length,
        }
    }

    /// Append a notification, evicting the oldest one if the log is full
    ///
    /// Returns the evicted notification, if any.
    pub fn push(&mut self, message: impl AsRef<str>) -> Option<Notification> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };

        if let Some(old) = &evicted {
            debug!(message = %old.message, "Evicted oldest notification");
        }

        let message = truncate_chars(message.as_ref(), self.max_message_length);
        self.entries.push_back(Notification::new(message));
        evicted
    }

    /// Notifications oldest-first
    pub fn list(&self) -> Iter<'_, Notification> {
        self.entries.iter()
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
}
