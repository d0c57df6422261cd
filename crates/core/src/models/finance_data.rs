use serde::{Deserialize, Serialize};

use super::budget::{Budget, BudgetPeriod, BudgetStatus};
use super::category::{Category, CategoryTrend};
use super::transaction::{Transaction, TransactionKind};

/// The three collections the store owns. Cloning it yields a snapshot that
/// later mutations cannot affect.
///
/// Transactions are kept most-recent-first; budgets and categories in
/// creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub categories: Vec<Category>,
}

impl FinanceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo data the client starts with: five transactions, four budgets,
    /// four categories.
    pub fn sample() -> Self {
        Self {
            transactions: sample_transactions(),
            budgets: sample_budgets(),
            categories: sample_categories(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty() && self.categories.is_empty()
    }
}

fn transaction(
    id: u64,
    description: &str,
    amount: f64,
    kind: TransactionKind,
    date: &str,
    category: &str,
    account: &str,
) -> Transaction {
    Transaction {
        id,
        description: description.to_string(),
        amount,
        kind,
        date: date.to_string(),
        category: category.to_string(),
        account: account.to_string(),
    }
}

fn sample_transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};
    vec![
        transaction(1, "Monthly Salary", 4000.0, Income, "2024-01-15", "Salary", "Checking"),
        transaction(2, "Whole Foods", -120.0, Expense, "2024-01-14", "Groceries", "Credit Card"),
        transaction(3, "Shell Gas Station", -60.0, Expense, "2024-01-13", "Transportation", "Debit Card"),
        transaction(4, "Freelance Project", 500.0, Income, "2024-01-12", "Freelance", "Checking"),
        transaction(5, "Netflix Subscription", -15.0, Expense, "2024-01-11", "Entertainment", "Credit Card"),
    ]
}

fn budget(id: u64, category: &str, budgeted: f64, spent: f64, color: &str, status: BudgetStatus) -> Budget {
    Budget {
        id,
        category: category.to_string(),
        budgeted,
        spent,
        period: BudgetPeriod::Monthly,
        color: color.to_string(),
        status,
    }
}

fn sample_budgets() -> Vec<Budget> {
    use BudgetStatus::{OnTrack, OverBudget};
    vec![
        budget(1, "Groceries", 400.0, 320.0, "#22c55e", OnTrack),
        budget(2, "Transportation", 200.0, 180.0, "#3b82f6", OnTrack),
        budget(3, "Entertainment", 150.0, 175.0, "#f59e0b", OverBudget),
        budget(4, "Shopping", 300.0, 450.0, "#ef4444", OverBudget),
    ]
}

#[allow(clippy::too_many_arguments)]
fn category(
    id: u64,
    name: &str,
    kind: TransactionKind,
    color: &str,
    total_amount: f64,
    transaction_count: u32,
    avg_transaction: f64,
    trend: CategoryTrend,
) -> Category {
    Category {
        id,
        name: name.to_string(),
        kind,
        color: color.to_string(),
        total_amount,
        transaction_count,
        avg_transaction,
        trend,
    }
}

fn sample_categories() -> Vec<Category> {
    use TransactionKind::{Expense, Income};
    vec![
        category(1, "Salary", Income, "#22c55e", 4500.0, 2, 2250.0, CategoryTrend::Up),
        category(2, "Freelance", Income, "#10b981", 1200.0, 3, 400.0, CategoryTrend::Up),
        category(3, "Groceries", Expense, "#3b82f6", 450.0, 8, 56.0, CategoryTrend::Stable),
        category(4, "Transportation", Expense, "#8b5cf6", 320.0, 12, 27.0, CategoryTrend::Down),
    ]
}
