use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::amount::nan_if_null;
use crate::errors::CoreError;

/// Share of the budget below which spending counts as "under budget".
pub const UNDER_BUDGET_RATIO: f64 = 0.8;

/// How often a budget resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetPeriod::Weekly => write!(f, "weekly"),
            BudgetPeriod::Monthly => write!(f, "monthly"),
            BudgetPeriod::Quarterly => write!(f, "quarterly"),
            BudgetPeriod::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "quarterly" => Ok(BudgetPeriod::Quarterly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            _ => Err(CoreError::invalid_value("period", s)),
        }
    }
}

/// Spending health of a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    OnTrack,
    OverBudget,
    UnderBudget,
}

impl BudgetStatus {
    /// Classify spending against a target.
    ///
    /// - `spent > budgeted` → over budget
    /// - `spent < budgeted * 0.8` → under budget
    /// - otherwise → on track
    ///
    /// NaN on either side fails both comparisons and lands on `OnTrack`.
    pub fn classify(spent: f64, budgeted: f64) -> Self {
        if spent > budgeted {
            BudgetStatus::OverBudget
        } else if spent < budgeted * UNDER_BUDGET_RATIO {
            BudgetStatus::UnderBudget
        } else {
            BudgetStatus::OnTrack
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetStatus::OnTrack => write!(f, "on-track"),
            BudgetStatus::OverBudget => write!(f, "over-budget"),
            BudgetStatus::UnderBudget => write!(f, "under-budget"),
        }
    }
}

impl FromStr for BudgetStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on-track" => Ok(BudgetStatus::OnTrack),
            "over-budget" => Ok(BudgetStatus::OverBudget),
            "under-budget" => Ok(BudgetStatus::UnderBudget),
            _ => Err(CoreError::invalid_value("status", s)),
        }
    }
}

/// A spending target for one category over a period.
///
/// `spent` and `status` are derived: they move when an expense in the same
/// category is added, and are otherwise left as last written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: u64,

    /// Category name this budget tracks (matched by exact string equality).
    pub category: String,

    /// Target amount for the period.
    #[serde(deserialize_with = "nan_if_null")]
    pub budgeted: f64,

    /// Accumulated spending.
    #[serde(deserialize_with = "nan_if_null")]
    pub spent: f64,

    pub period: BudgetPeriod,

    /// Display color token, e.g. `#22c55e`.
    pub color: String,

    pub status: BudgetStatus,
}

impl Budget {
    /// Record an expense against this budget and re-classify it.
    pub(crate) fn record_spending(&mut self, amount: f64) {
        self.spent += amount.abs();
        self.status = BudgetStatus::classify(self.spent, self.budgeted);
    }

    /// Percentage of the budget used, capped at 100.
    #[must_use]
    pub fn usage_pct(&self) -> f64 {
        ((self.spent / self.budgeted) * 100.0).min(100.0)
    }

    /// Amount left before going over (negative when over budget).
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.budgeted - self.spent
    }

    pub(crate) fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(budgeted) = patch.budgeted {
            self.budgeted = budgeted;
        }
        if let Some(spent) = patch.spent {
            self.spent = spent;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Input for creating a budget. `spent` and `status` are always
/// initialized by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub budgeted: f64,
    pub period: BudgetPeriod,
    pub color: String,
}

impl NewBudget {
    pub fn new(
        category: impl Into<String>,
        budgeted: f64,
        period: BudgetPeriod,
        color: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            budgeted,
            period,
            color: color.into(),
        }
    }
}

/// Partial update for a budget. Does not trigger status recomputation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub budgeted: Option<f64>,
    pub spent: Option<f64>,
    pub period: Option<BudgetPeriod>,
    pub color: Option<String>,
    pub status: Option<BudgetStatus>,
}
