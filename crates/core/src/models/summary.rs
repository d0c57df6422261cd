use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Sum of |amount| over income transactions
    pub total_income: f64,

    /// Sum of |amount| over expense transactions
    pub total_expenses: f64,

    /// total_income - total_expenses
    pub net_savings: f64,

    pub transaction_count: usize,

    /// The first N transactions in collection order (newest first)
    pub recent_transactions: Vec<Transaction>,
}

/// Aggregates shown at the top of the budgets screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetOverview {
    pub total_budgeted: f64,
    pub total_spent: f64,
    pub over_budget_count: usize,
    pub on_track_count: usize,
    pub under_budget_count: usize,
}

impl BudgetOverview {
    /// Amount still available across all budgets (negative when over).
    #[must_use]
    pub fn total_remaining(&self) -> f64 {
        self.total_budgeted - self.total_spent
    }
}

/// Aggregates shown at the top of the categories screen. Totals come from
/// the categories' own `total_amount` snapshots, not from transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOverview {
    pub income_categories: usize,
    pub expense_categories: usize,
    pub total_income: f64,
    pub total_expenses: f64,
}

/// Criteria for narrowing the transaction list. Every `None` criterion
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description.
    pub search: Option<String>,

    pub kind: Option<TransactionKind>,

    /// Exact category name.
    pub category: Option<String>,

    /// Inclusive lower date bound. Transactions whose date doesn't parse
    /// are excluded once a bound is set.
    pub from: Option<NaiveDate>,

    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Whether a transaction satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            if !transaction.description.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &transaction.category != category {
                return false;
            }
        }
        if self.from.is_some() || self.to.is_some() {
            let Some(date) = transaction.parsed_date() else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }
        true
    }
}
