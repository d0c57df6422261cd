use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

use super::amount::nan_if_null;
use super::transaction::TransactionKind;

/// Direction of a category's recent activity. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTrend {
    Up,
    Down,
    Stable,
}

impl std::fmt::Display for CategoryTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryTrend::Up => write!(f, "up"),
            CategoryTrend::Down => write!(f, "down"),
            CategoryTrend::Stable => write!(f, "stable"),
        }
    }
}

impl FromStr for CategoryTrend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(CategoryTrend::Up),
            "down" => Ok(CategoryTrend::Down),
            "stable" => Ok(CategoryTrend::Stable),
            _ => Err(CoreError::invalid_value("trend", s)),
        }
    }
}

/// A named bucket for transactions.
///
/// **Note**: `total_amount`, `transaction_count` and `avg_transaction` are
/// snapshots taken when the category was created or last edited. Adding or
/// removing transactions does not refresh them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,

    /// Display name, referenced by `Transaction::category` and
    /// `Budget::category`. Uniqueness is not enforced.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub color: String,

    #[serde(deserialize_with = "nan_if_null")]
    pub total_amount: f64,

    pub transaction_count: u32,

    #[serde(deserialize_with = "nan_if_null")]
    pub avg_transaction: f64,

    pub trend: CategoryTrend,
}

impl Category {
    pub(crate) fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(total_amount) = patch.total_amount {
            self.total_amount = total_amount;
        }
        if let Some(transaction_count) = patch.transaction_count {
            self.transaction_count = transaction_count;
        }
        if let Some(avg_transaction) = patch.avg_transaction {
            self.avg_transaction = avg_transaction;
        }
        if let Some(trend) = patch.trend {
            self.trend = trend;
        }
    }
}

/// Input for creating a category. Aggregates start at zero, trend at stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, kind: TransactionKind, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            color: color.into(),
        }
    }
}

/// Partial update for a category. No cascade to transactions or budgets
/// that reference the old name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub color: Option<String>,
    pub total_amount: Option<f64>,
    pub transaction_count: Option<u32>,
    pub avg_transaction: Option<f64>,
    pub trend: Option<CategoryTrend>,
}
