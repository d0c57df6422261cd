// ═══════════════════════════════════════════════════════════════════
// Export Tests — start/complete notification pair, delay, cancellation
// on teardown
// ═══════════════════════════════════════════════════════════════════

use std::sync::Arc;
use std::time::Duration;

use finance_tracker_core::models::export::ExportRequest;
use finance_tracker_core::models::finance_data::FinanceData;
use finance_tracker_core::models::settings::Settings;
use finance_tracker_core::notifications::hub::NotificationHub;
use finance_tracker_core::notifications::recorder::NotificationRecorder;
use finance_tracker_core::services::export_service::ExportScheduler;
use finance_tracker_core::FinanceStore;

fn recorded_store() -> (FinanceStore, NotificationRecorder) {
    let store = FinanceStore::new();
    let recorder = NotificationRecorder::new();
    store.subscribe(Arc::new(recorder.clone()));
    (store, recorder)
}

fn csv_request() -> ExportRequest {
    ExportRequest::new("transactions", "csv", "last-month")
}

#[tokio::test(start_paused = true)]
async fn start_is_immediate_and_complete_follows_after_delay() {
    let (mut store, recorder) = recorded_store();
    store.export_data(csv_request());

    let notes = recorder.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Export Started");
    assert_eq!(
        notes[0].description,
        "Exporting transactions data in csv format for last-month..."
    );
    assert_eq!(store.pending_exports(), 1);

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert_eq!(recorder.len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    let notes = recorder.notifications();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[1].title, "Export Complete");
    assert_eq!(
        notes[1].description,
        "Your data has been exported successfully. Download should start shortly."
    );
    assert_eq!(store.pending_exports(), 0);
}

#[tokio::test(start_paused = true)]
async fn export_does_not_touch_collections() {
    let mut store = FinanceStore::with_sample_data();
    let before = store.snapshot();
    store.export_data(csv_request());
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(store.snapshot(), before);
    assert_eq!(store.revision(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_store_cancels_completion() {
    let (mut store, recorder) = recorded_store();
    store.export_data(csv_request());
    drop(store);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(recorder.titles(), vec!["Export Started"]);
}

#[tokio::test(start_paused = true)]
async fn cancel_pending_exports() {
    let (mut store, recorder) = recorded_store();
    store.export_data(csv_request());
    store.export_data(ExportRequest::new("budgets", "pdf", "2024"));
    assert_eq!(store.pending_exports(), 2);

    assert_eq!(store.cancel_pending_exports(), 2);
    assert_eq!(store.pending_exports(), 0);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(recorder.titles(), vec!["Export Started", "Export Started"]);
}

#[tokio::test(start_paused = true)]
async fn overlapping_exports_each_complete() {
    let (mut store, recorder) = recorded_store();
    store.export_data(csv_request());
    tokio::time::sleep(Duration::from_millis(500)).await;
    store.export_data(ExportRequest::new("categories", "xlsx", "last 6 months"));

    tokio::time::sleep(Duration::from_millis(2600)).await;
    assert_eq!(
        recorder.titles(),
        vec!["Export Started", "Export Started", "Export Complete", "Export Complete"]
    );
}

#[tokio::test(start_paused = true)]
async fn delay_comes_from_settings() {
    let settings = Settings {
        export_delay_ms: 100,
        ..Settings::default()
    };
    let mut store = FinanceStore::with_settings(FinanceData::default(), settings).unwrap();
    let recorder = NotificationRecorder::new();
    store.subscribe(Arc::new(recorder.clone()));

    store.export_data(csv_request());
    tokio::time::sleep(Duration::from_millis(101)).await;
    assert_eq!(recorder.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn set_export_delay_applies_to_later_exports() {
    let (mut store, recorder) = recorded_store();
    store.set_export_delay(Duration::from_secs(10));
    assert_eq!(store.settings().export_delay_ms, 10_000);

    store.export_data(csv_request());
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(recorder.len(), 1);
    tokio::time::sleep(Duration::from_secs(8)).await;
    assert_eq!(recorder.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn unsubscribed_sink_misses_delayed_completion() {
    let store_recorder = NotificationRecorder::new();
    let mut store = FinanceStore::new();
    let id = store.subscribe(Arc::new(store_recorder.clone()));

    store.export_data(csv_request());
    store.unsubscribe(id);
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(store_recorder.titles(), vec!["Export Started"]);
}

#[test]
fn without_runtime_completion_is_immediate() {
    let (mut store, recorder) = recorded_store();
    store.export_data(csv_request());

    assert_eq!(recorder.titles(), vec!["Export Started", "Export Complete"]);
    assert_eq!(store.pending_exports(), 0);
}

#[tokio::test(start_paused = true)]
async fn scheduler_can_be_used_directly() {
    let hub = NotificationHub::new();
    let recorder = NotificationRecorder::new();
    hub.subscribe(Arc::new(recorder.clone()));

    let mut scheduler = ExportScheduler::new(Duration::from_millis(50));
    assert_eq!(scheduler.delay(), Duration::from_millis(50));
    scheduler.schedule_completion(&hub);
    assert_eq!(scheduler.pending_count(), 1);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(recorder.titles(), vec!["Export Complete"]);
    assert_eq!(scheduler.cancel_all(), 0);
}
