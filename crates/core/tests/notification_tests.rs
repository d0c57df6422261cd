// ═══════════════════════════════════════════════════════════════════
// Notification Tests — hub fan-out, subscription lifecycle, sinks
// ═══════════════════════════════════════════════════════════════════

use std::sync::{Arc, Mutex};

use finance_tracker_core::models::notification::Notification;
use finance_tracker_core::notifications::hub::NotificationHub;
use finance_tracker_core::notifications::recorder::NotificationRecorder;
use finance_tracker_core::notifications::traits::NotificationSink;
use finance_tracker_core::notifications::tracing_sink::TracingSink;

/// Appends its tag to a shared log, to check delivery order.
struct TaggedSink {
    tag: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl NotificationSink for TaggedSink {
    fn notify(&self, notification: &Notification) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.tag, notification.title));
    }
}

mod hub {
    use super::*;

    #[test]
    fn emit_without_subscribers_is_fine() {
        let hub = NotificationHub::new();
        hub.emit(Notification::new("Nobody", "listening"));
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn delivers_in_subscription_order() {
        let hub = NotificationHub::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        hub.subscribe(Arc::new(TaggedSink { tag: "a", log: Arc::clone(&log) }));
        hub.subscribe(Arc::new(TaggedSink { tag: "b", log: Arc::clone(&log) }));

        hub.emit(Notification::new("One", ""));
        hub.emit(Notification::new("Two", ""));

        assert_eq!(*log.lock().unwrap(), vec!["a:One", "b:One", "a:Two", "b:Two"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_sink() {
        let hub = NotificationHub::new();
        let first = NotificationRecorder::new();
        let second = NotificationRecorder::new();
        let first_id = hub.subscribe(Arc::new(first.clone()));
        hub.subscribe(Arc::new(second.clone()));

        assert!(hub.unsubscribe(first_id));
        hub.emit(Notification::new("After", ""));

        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribe_twice_reports_false() {
        let hub = NotificationHub::new();
        let id = hub.subscribe(Arc::new(NotificationRecorder::new()));
        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
    }

    #[test]
    fn subscription_ids_are_distinct() {
        let hub = NotificationHub::new();
        let a = hub.subscribe(Arc::new(NotificationRecorder::new()));
        let b = hub.subscribe(Arc::new(NotificationRecorder::new()));
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn clones_share_subscribers() {
        let hub = NotificationHub::new();
        let clone = hub.clone();
        let recorder = NotificationRecorder::new();
        clone.subscribe(Arc::new(recorder.clone()));

        hub.emit(Notification::new("Shared", ""));
        assert_eq!(recorder.len(), 1);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn sink_may_subscribe_during_delivery() {
        let hub = NotificationHub::new();
        let late = NotificationRecorder::new();
        let hub_for_sink = hub.clone();
        let late_for_sink = late.clone();
        hub.subscribe(Arc::new(move |_: &Notification| {
            if hub_for_sink.subscriber_count() == 1 {
                hub_for_sink.subscribe(Arc::new(late_for_sink.clone()));
            }
        }));

        hub.emit(Notification::new("First", ""));
        // Late sink joined mid-delivery and only sees what comes after
        assert!(late.is_empty());
        hub.emit(Notification::new("Second", ""));
        assert_eq!(late.titles(), vec!["Second"]);
    }
}

mod recorder {
    use super::*;

    #[test]
    fn keeps_order_and_clears() {
        let recorder = NotificationRecorder::new();
        recorder.notify(&Notification::new("A", "1"));
        recorder.notify(&Notification::destructive("B", "2"));

        assert_eq!(recorder.titles(), vec!["A", "B"]);
        assert_eq!(recorder.last().unwrap().description, "2");

        recorder.clear();
        assert!(recorder.is_empty());
        assert!(recorder.last().is_none());
    }

    #[test]
    fn clones_share_buffer() {
        let recorder = NotificationRecorder::new();
        let clone = recorder.clone();
        clone.notify(&Notification::new("A", ""));
        assert_eq!(recorder.len(), 1);
    }
}

mod tracing_sink {
    use super::*;

    #[test]
    fn accepts_both_severities_without_subscriber() {
        let hub = NotificationHub::new();
        hub.subscribe(Arc::new(TracingSink));
        hub.emit(Notification::new("Info", "plain"));
        hub.emit(Notification::destructive("Oops", "bad"));
        assert_eq!(hub.subscriber_count(), 1);
    }
}
