use std::collections::HashSet;

use crate::models::budget::BudgetStatus;
use crate::models::category::Category;
use crate::models::finance_data::FinanceData;
use crate::models::summary::{BudgetOverview, CategoryOverview, DashboardSummary, TransactionFilter};
use crate::models::transaction::{Transaction, TransactionKind};

/// Read-only views over a [`FinanceData`] snapshot.
///
/// Everything is recomputed on each call from the collections as they are
/// now; nothing is cached.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Income and expense totals use |amount|, so a transaction whose sign
    /// was patched out of line with its kind still counts by magnitude.
    pub fn dashboard(&self, data: &FinanceData, recent_limit: usize) -> DashboardSummary {
        let total_income = Self::sum_abs(&data.transactions, TransactionKind::Income);
        let total_expenses = Self::sum_abs(&data.transactions, TransactionKind::Expense);

        DashboardSummary {
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
            transaction_count: data.transactions.len(),
            recent_transactions: data.transactions.iter().take(recent_limit).cloned().collect(),
        }
    }

    pub fn budget_overview(&self, data: &FinanceData) -> BudgetOverview {
        let count = |status: BudgetStatus| data.budgets.iter().filter(|b| b.status == status).count();

        BudgetOverview {
            total_budgeted: data.budgets.iter().map(|b| b.budgeted).sum(),
            total_spent: data.budgets.iter().map(|b| b.spent).sum(),
            over_budget_count: count(BudgetStatus::OverBudget),
            on_track_count: count(BudgetStatus::OnTrack),
            under_budget_count: count(BudgetStatus::UnderBudget),
        }
    }

    pub fn category_overview(&self, data: &FinanceData) -> CategoryOverview {
        let of_kind = |kind: TransactionKind| data.categories.iter().filter(move |c| c.kind == kind);

        CategoryOverview {
            income_categories: of_kind(TransactionKind::Income).count(),
            expense_categories: of_kind(TransactionKind::Expense).count(),
            total_income: of_kind(TransactionKind::Income).map(|c| c.total_amount).sum(),
            total_expenses: of_kind(TransactionKind::Expense).map(|c| c.total_amount).sum(),
        }
    }

    /// Transactions matching `filter`, in collection order (newest first).
    pub fn filter_transactions<'a>(
        &self,
        data: &'a FinanceData,
        filter: &TransactionFilter,
    ) -> Vec<&'a Transaction> {
        data.transactions.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn categories_of_kind<'a>(&self, data: &'a FinanceData, kind: TransactionKind) -> Vec<&'a Category> {
        data.categories.iter().filter(|c| c.kind == kind).collect()
    }

    /// Category names used by budgets or transactions that no category in
    /// the collection carries. Sorted, deduplicated.
    pub fn orphaned_categories(&self, data: &FinanceData) -> Vec<String> {
        let known: HashSet<&str> = data.categories.iter().map(|c| c.name.as_str()).collect();
        let mut orphans: Vec<String> = data
            .budgets
            .iter()
            .map(|b| b.category.as_str())
            .chain(data.transactions.iter().map(|t| t.category.as_str()))
            .filter(|name| !known.contains(name))
            .collect::<HashSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        orphans.sort();
        orphans
    }

    fn sum_abs(transactions: &[Transaction], kind: TransactionKind) -> f64 {
        transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount.abs())
            .sum()
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
