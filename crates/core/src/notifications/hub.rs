use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::notification::Notification;

use super::traits::NotificationSink;

/// Handle returned by [`NotificationHub::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Subscribers = Vec<(SubscriptionId, Arc<dyn NotificationSink>)>;

/// Fan-out point for store notifications.
///
/// Subscribers are called in subscription order. The hub is cheap to clone
/// and clones share the subscriber list, which lets the delayed export task
/// deliver into the same set of sinks as the store.
#[derive(Clone, Default)]
pub struct NotificationHub {
    subscribers: Arc<RwLock<Subscribers>>,
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink. It receives every notification emitted from now on.
    pub fn subscribe(&self, sink: Arc<dyn NotificationSink>) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((id, sink));
        id
    }

    /// Remove a sink. Returns `false` if the id was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Deliver a notification to every current subscriber.
    pub fn emit(&self, notification: Notification) {
        // Snapshot the list so sinks run without the lock held.
        let sinks: Vec<Arc<dyn NotificationSink>> = self
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|(_, sink)| Arc::clone(sink))
            .collect();

        tracing::debug!(
            title = %notification.title,
            subscribers = sinks.len(),
            "emitting notification"
        );

        for sink in sinks {
            sink.notify(&notification);
        }
    }
}
