pub mod errors;
pub mod models;
pub mod notifications;
pub mod services;

use std::sync::Arc;

use models::{
    budget::{Budget, BudgetPatch, NewBudget},
    category::{Category, CategoryPatch, NewCategory},
    export::ExportRequest,
    finance_data::FinanceData,
    notification::{format_amount, Notification},
    settings::{validate_currency, Settings},
    summary::{BudgetOverview, CategoryOverview, DashboardSummary, TransactionFilter},
    transaction::{NewTransaction, Transaction, TransactionKind, TransactionPatch},
};
use notifications::{
    hub::{NotificationHub, SubscriptionId},
    traits::NotificationSink,
};
use services::{
    budget_service::BudgetService, category_service::CategoryService,
    export_service::ExportScheduler, summary_service::SummaryService,
    transaction_service::TransactionService,
};

use errors::CoreError;

/// Main entry point for the finance-tracker core library.
///
/// Owns the transactions, budgets and categories, performs every mutation,
/// and tells subscribers what happened. Pass it (or a reference to it) to
/// whatever renders the data; there is no global instance.
///
/// Every mutation emits exactly one notification, even when the target id
/// does not exist. `export_data` emits two, the second after a delay.
#[must_use]
pub struct FinanceStore {
    data: FinanceData,
    settings: Settings,
    hub: NotificationHub,
    exports: ExportScheduler,
    transaction_service: TransactionService,
    budget_service: BudgetService,
    category_service: CategoryService,
    summary_service: SummaryService,
    /// Bumped on every mutation so views can tell when to re-render.
    revision: u64,
}

impl std::fmt::Debug for FinanceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceStore")
            .field("transactions", &self.data.transactions.len())
            .field("budgets", &self.data.budgets.len())
            .field("categories", &self.data.categories.len())
            .field("subscribers", &self.hub.subscriber_count())
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for FinanceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanceStore {
    /// Empty store with default settings.
    pub fn new() -> Self {
        Self::build(FinanceData::default(), Settings::default())
    }

    /// Store pre-filled with the demo transactions, budgets and categories.
    pub fn with_sample_data() -> Self {
        Self::build(FinanceData::sample(), Settings::default())
    }

    /// Store over existing collections.
    pub fn with_data(data: FinanceData) -> Self {
        Self::build(data, Settings::default())
    }

    pub fn with_settings(data: FinanceData, settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(data, settings))
    }

    /// Build a store from a JSON snapshot produced by [`FinanceStore::to_json`].
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let data: FinanceData = serde_json::from_str(json)?;
        Ok(Self::with_data(data))
    }

    /// Serialize the current collections as pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.data)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize finance data: {e}")))
    }

    // ── Notifications ───────────────────────────────────────────────

    /// Register a notification sink. Only notifications emitted after this
    /// call are delivered.
    pub fn subscribe(&self, sink: Arc<dyn NotificationSink>) -> SubscriptionId {
        self.hub.subscribe(sink)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }

    // ── Snapshots ───────────────────────────────────────────────────

    /// Transactions, most recent first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    /// Budgets in creation order.
    #[must_use]
    pub fn budgets(&self) -> &[Budget] {
        &self.data.budgets
    }

    /// Categories in creation order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    /// Owned copy of all three collections, unaffected by later mutations.
    #[must_use]
    pub fn snapshot(&self) -> FinanceData {
        self.data.clone()
    }

    #[must_use]
    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.data.transactions.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn budget(&self, id: u64) -> Option<&Budget> {
        self.data.budgets.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn category(&self, id: u64) -> Option<&Category> {
        self.data.categories.iter().find(|c| c.id == id)
    }

    /// First category with exactly this name.
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.data.categories.iter().find(|c| c.name == name)
    }

    /// Number of mutations applied since the store was built.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record a transaction. The sign of `amount` is replaced by the one
    /// implied by `kind`; expenses are charged to every budget with the
    /// same category name. Returns the stored record.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Transaction {
        let added = self.transaction_service.add(&mut self.data, new);
        let transaction = added.transaction;
        tracing::debug!(
            id = transaction.id,
            kind = %transaction.kind,
            amount = transaction.amount,
            budgets = ?added.affected_budgets,
            "transaction added"
        );

        let amount = format_amount(&self.settings.currency_symbol, transaction.amount.abs());
        self.touch();
        self.hub
            .emit(Notification::transaction_added(transaction.kind.label(), &amount));
        transaction
    }

    /// Merge `patch` into the transaction with `id`. Unknown ids are a
    /// silent no-op; the notification is emitted either way. Budgets are
    /// not adjusted.
    pub fn update_transaction(&mut self, id: u64, patch: TransactionPatch) {
        if self.transaction_service.update(&mut self.data, id, patch) {
            tracing::debug!(id, "transaction updated");
        } else {
            tracing::warn!(id, "update of unknown transaction ignored");
        }
        self.touch();
        self.hub.emit(Notification::transaction_updated());
    }

    /// Remove the transaction with `id`. Amounts already charged to budgets
    /// stay charged.
    pub fn delete_transaction(&mut self, id: u64) {
        match self.transaction_service.remove(&mut self.data, id) {
            Some(_) => tracing::debug!(id, "transaction deleted"),
            None => tracing::warn!(id, "delete of unknown transaction ignored"),
        }
        self.touch();
        self.hub.emit(Notification::transaction_deleted());
    }

    // ── Budgets ─────────────────────────────────────────────────────

    /// Create a budget with `spent = 0` and status under-budget.
    pub fn add_budget(&mut self, new: NewBudget) -> Budget {
        let budget = self.budget_service.add(&mut self.data, new);
        tracing::debug!(id = budget.id, category = %budget.category, "budget added");
        self.touch();
        self.hub.emit(Notification::budget_created(&budget.category));
        budget
    }

    /// Merge `patch` into the budget with `id`. Status is not recomputed.
    pub fn update_budget(&mut self, id: u64, patch: BudgetPatch) {
        if self.budget_service.update(&mut self.data, id, patch) {
            tracing::debug!(id, "budget updated");
        } else {
            tracing::warn!(id, "update of unknown budget ignored");
        }
        self.touch();
        self.hub.emit(Notification::budget_updated());
    }

    pub fn delete_budget(&mut self, id: u64) {
        match self.budget_service.remove(&mut self.data, id) {
            Some(_) => tracing::debug!(id, "budget deleted"),
            None => tracing::warn!(id, "delete of unknown budget ignored"),
        }
        self.touch();
        self.hub.emit(Notification::budget_deleted());
    }

    // ── Categories ──────────────────────────────────────────────────

    /// Create a category with zeroed aggregates and a stable trend.
    pub fn add_category(&mut self, new: NewCategory) -> Category {
        let category = self.category_service.add(&mut self.data, new);
        tracing::debug!(id = category.id, name = %category.name, "category added");
        self.touch();
        self.hub.emit(Notification::category_created(&category.name));
        category
    }

    /// Merge `patch` into the category with `id`. Transactions and budgets
    /// that refer to the old name are left alone.
    pub fn update_category(&mut self, id: u64, patch: CategoryPatch) {
        if self.category_service.update(&mut self.data, id, patch) {
            tracing::debug!(id, "category updated");
        } else {
            tracing::warn!(id, "update of unknown category ignored");
        }
        self.touch();
        self.hub.emit(Notification::category_updated());
    }

    pub fn delete_category(&mut self, id: u64) {
        match self.category_service.remove(&mut self.data, id) {
            Some(_) => tracing::debug!(id, "category deleted"),
            None => tracing::warn!(id, "delete of unknown category ignored"),
        }
        self.touch();
        self.hub.emit(Notification::category_deleted());
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Announce an export. Emits `Export Started` now and `Export Complete`
    /// after the configured delay. No file is produced.
    ///
    /// The delayed notification runs on the current tokio runtime and is
    /// cancelled if the store is dropped first.
    pub fn export_data(&mut self, request: ExportRequest) {
        tracing::info!(
            data_type = %request.data_type,
            format = %request.format,
            date_range = %request.date_range,
            "export requested"
        );
        self.hub.emit(Notification::export_started(
            &request.data_type,
            &request.format,
            &request.date_range,
        ));
        self.exports.schedule_completion(&self.hub);
    }

    /// Number of export completions still waiting to fire.
    #[must_use]
    pub fn pending_exports(&self) -> usize {
        self.exports.pending_count()
    }

    /// Drop every pending `Export Complete`. Returns how many were pending.
    pub fn cancel_pending_exports(&mut self) -> usize {
        self.exports.cancel_all()
    }

    // ── Summaries ───────────────────────────────────────────────────

    /// Totals and the most recent transactions for the dashboard.
    #[must_use]
    pub fn dashboard_summary(&self) -> DashboardSummary {
        self.summary_service
            .dashboard(&self.data, self.settings.recent_transactions_limit)
    }

    #[must_use]
    pub fn budget_overview(&self) -> BudgetOverview {
        self.summary_service.budget_overview(&self.data)
    }

    #[must_use]
    pub fn category_overview(&self) -> CategoryOverview {
        self.summary_service.category_overview(&self.data)
    }

    /// Transactions matching `filter`, newest first.
    #[must_use]
    pub fn search_transactions(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.summary_service.filter_transactions(&self.data, filter)
    }

    #[must_use]
    pub fn categories_of_kind(&self, kind: TransactionKind) -> Vec<&Category> {
        self.summary_service.categories_of_kind(&self.data, kind)
    }

    /// Category names referenced by budgets or transactions with no
    /// matching category.
    #[must_use]
    pub fn orphaned_categories(&self) -> Vec<String> {
        self.summary_service.orphaned_categories(&self.data)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the display currency. Must be three ASCII letters.
    pub fn set_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        self.settings.currency = validate_currency(currency)?;
        Ok(())
    }

    /// Symbol used when formatting amounts in notifications.
    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) {
        self.settings.currency_symbol = symbol.into();
    }

    /// Applies to exports requested after this call.
    pub fn set_export_delay(&mut self, delay: std::time::Duration) {
        self.settings.export_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.exports.set_delay(delay);
    }

    // ── Internal ────────────────────────────────────────────────────

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn build(data: FinanceData, settings: Settings) -> Self {
        let exports = ExportScheduler::new(settings.export_delay());

        Self {
            data,
            settings,
            hub: NotificationHub::new(),
            exports,
            transaction_service: TransactionService::new(),
            budget_service: BudgetService::new(),
            category_service: CategoryService::new(),
            summary_service: SummaryService::new(),
            revision: 0,
        }
    }
}
