//! Notification queue state
//!
//! Holds every visible toast in display order (oldest first). Expiry timers
//! live in the scheduler; the queue keeps each toast's [`TaskHandle`] so that
//! removing a toast always cancels its pending expiry.

use std::time::Instant;

use crate::scheduler::TaskHandle;
use crate::theme;
use crate::theme::notification::NotificationColors;

/// Notification severity - determines style only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn colors(self) -> NotificationColors {
        match self {
            Severity::Success => theme::notification::SUCCESS,
            Severity::Error => theme::notification::ERROR,
            Severity::Warning => theme::notification::WARNING,
            Severity::Info => theme::notification::INFO,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

/// A single toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    expiry: Option<TaskHandle>,
}

impl Notification {
    #[cfg(test)]
    pub fn has_pending_expiry(&self) -> bool {
        self.expiry.as_ref().is_some_and(|handle| !handle.is_cancelled())
    }

    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.cancel();
        }
    }
}

#[derive(Debug)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
    /// 0 = unbounded
    max_visible: usize,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NotificationQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            max_visible,
        }
    }

    /// Append a toast and return its id.
    ///
    /// When the queue is bounded and full, the oldest toasts are evicted.
    pub fn push(&mut self, message: &str, severity: Severity, now: Instant) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        self.items.push(Notification {
            id,
            message: message.to_string(),
            severity,
            created_at: now,
            expiry: None,
        });
        log::debug!("Notification {:?} pushed ({:?}): {}", id, severity, message);

        if self.max_visible > 0 {
            while self.items.len() > self.max_visible {
                let mut evicted = self.items.remove(0);
                evicted.cancel_expiry();
                log::debug!("Notification {:?} evicted", evicted.id);
            }
        }

        id
    }

    /// Attach the expiry task for `id`.
    ///
    /// If the toast is already gone the handle is cancelled straight away.
    /// A previously attached handle is cancelled and replaced.
    pub fn set_expiry(&mut self, id: NotificationId, handle: TaskHandle) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.cancel_expiry();
                notification.expiry = Some(handle);
                true
            }
            None => {
                handle.cancel();
                false
            }
        }
    }

    /// Remove the toast with `id`, cancelling its expiry.
    ///
    /// Returns false when there was nothing to remove.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.items.iter().position(|n| n.id == id) {
            Some(index) => {
                let mut removed = self.items.remove(index);
                removed.cancel_expiry();
                log::debug!("Notification {:?} removed", id);
                true
            }
            None => false,
        }
    }

    /// Dismiss the newest toast, if any
    pub fn dismiss_latest(&mut self) -> Option<NotificationId> {
        let id = self.items.last()?.id;
        self.dismiss(id);
        Some(id)
    }

    pub fn clear(&mut self) {
        for mut notification in self.items.drain(..) {
            notification.cancel_expiry();
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Messages in display order (test-only)
    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.items.iter().map(|n| n.message.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
