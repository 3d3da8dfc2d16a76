use crate::notification::{NewNotification, Notification};
use std::collections::VecDeque;

/// Bounded, most-recent-first notification log
#[derive(Clone, Debug)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Stamp `new` and put it at the front, evicting the oldest entries
    /// beyond capacity.
    pub fn push(&mut self, new: NewNotification) -> Notification {
        let notification = new.into_notification();
        self.entries.push_front(notification.clone());
        self.entries.truncate(self.capacity);
        notification
    }

    /// Snapshot of all entries, most recent first
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
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

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Flag every entry read. Returns how many were unread.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for entry in self.entries.iter_mut().filter(|n| !n.read) {
            entry.read = true;
            changed += 1;
        }
        changed
    }

    /// Empty the log. Returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new(crate::notification::NotificationConfig::default().capacity)
    }
}
