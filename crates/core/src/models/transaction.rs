use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::amount::nan_if_null;
use crate::errors::CoreError;

/// Direction of money flow. Shared by transactions and categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, freelance, ...)
    Income,
    /// Money going out (groceries, rent, ...)
    Expense,
}

impl TransactionKind {
    /// Capitalized label used in notification text.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// Apply the sign convention for this kind: expenses are stored
    /// negative, income positive, whatever sign the caller supplied.
    pub fn normalize_amount(&self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount.abs(),
            TransactionKind::Expense => -amount.abs(),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(CoreError::invalid_value("type", s)),
        }
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,

    pub description: String,

    /// Signed amount: positive for income, negative for expense.
    #[serde(deserialize_with = "nan_if_null")]
    pub amount: f64,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Calendar date as entered, normally `YYYY-MM-DD`.
    pub date: String,

    /// Name of the category this belongs to. Not checked against the
    /// category collection.
    pub category: String,

    /// Free-text account label (e.g. "Checking", "Credit Card").
    pub account: String,
}

impl Transaction {
    /// Parse `date` as an ISO calendar date. `None` if it isn't one.
    pub fn parsed_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub(crate) fn apply(&mut self, patch: TransactionPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(account) = patch.account {
            self.account = account;
        }
    }
}

/// Input for creating a transaction. The id is assigned by the store and
/// the amount's sign is taken from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: String,
    pub category: String,
    pub account: String,
}

impl NewTransaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        date: impl Into<String>,
        category: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            date: date.into(),
            category: category.into(),
            account: account.into(),
        }
    }

    pub fn income(
        description: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        category: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self::new(description, amount, TransactionKind::Income, date, category, account)
    }

    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        category: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self::new(description, amount, TransactionKind::Expense, date, category, account)
    }
}

/// Partial update for a transaction. `None` fields are left untouched.
///
/// Applying a patch does not re-check that the amount's sign matches the
/// kind, and never touches budgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub account: Option<String>,
}
