use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::notification::Notification;

use super::traits::NotificationSink;

/// Sink that keeps every notification it receives, in order.
///
/// Cloning shares the underlying buffer, so a clone can be subscribed to a
/// store while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct NotificationRecorder {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.lock().iter().map(|n| n.title.clone()).collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.lock().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        // Poisoning leaves the Vec intact.
        self.received.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for NotificationRecorder {
    fn notify(&self, notification: &Notification) {
        self.lock().push(notification.clone());
    }
}
