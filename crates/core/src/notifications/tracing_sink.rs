use crate::models::notification::{Notification, Severity};

use super::traits::NotificationSink;

/// Forwards notifications to `tracing`, for headless consumers that have
/// no toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Default => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            Severity::Destructive => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
    }
}
