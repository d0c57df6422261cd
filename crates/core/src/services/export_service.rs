use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::notification::Notification;
use crate::notifications::hub::NotificationHub;

/// Owns the delayed "Export Complete" notifications.
///
/// Each export spawns one task on the ambient tokio runtime that sleeps for
/// the configured delay and then emits. Pending tasks are aborted when the
/// scheduler is dropped, so a torn-down store never notifies.
#[derive(Debug)]
pub struct ExportScheduler {
    delay: Duration,
    pending: Vec<JoinHandle<()>>,
}

impl ExportScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Arrange for `Export Complete` to be emitted on `hub` after the delay.
    ///
    /// Outside a tokio runtime there is nothing to schedule on; the
    /// completion is emitted right away so the start/complete pair stays
    /// intact.
    pub fn schedule_completion(&mut self, hub: &NotificationHub) {
        self.pending.retain(|handle| !handle.is_finished());

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let hub = hub.clone();
                let delay = self.delay;
                let handle = runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    hub.emit(Notification::export_complete());
                });
                self.pending.push(handle);
                tracing::info!(?delay, "export completion scheduled");
            }
            Err(_) => {
                tracing::warn!("no tokio runtime available, completing export immediately");
                hub.emit(Notification::export_complete());
            }
        }
    }

    /// Number of completions still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Abort every pending completion. Returns how many were still waiting.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending_count();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if cancelled > 0 {
            tracing::debug!(cancelled, "cancelled pending export completions");
        }
        cancelled
    }
}

impl Drop for ExportScheduler {
    fn drop(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}
