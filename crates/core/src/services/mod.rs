pub mod budget_service;
pub mod category_service;
pub mod export_service;
pub mod summary_service;
pub mod transaction_service;

/// Next id under the `max(existing, 0) + 1` policy.
///
/// Deleting the current maximum makes its id available again; deleting
/// anything else leaves a gap that is never refilled.
///
/// Saturates at `u64::MAX`: once a collection holds that id, every later
/// add reuses it.
pub(crate) fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0).saturating_add(1)
}
