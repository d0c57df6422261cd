use crate::models::notification::Notification;

/// Anything that wants to hear about store outcomes: a toast renderer, a
/// status bar, a test recorder.
///
/// Sinks are called synchronously from inside the mutation that produced
/// the notification (or from the export task), so they should return
/// quickly and must not call back into the store.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}
