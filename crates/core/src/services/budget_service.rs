use crate::models::budget::{Budget, BudgetPatch, BudgetStatus, NewBudget};
use crate::models::finance_data::FinanceData;

use super::next_id;

/// Creates, patches and removes budgets.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new budget. It always starts at `spent = 0` and
    /// `UnderBudget`, even when `budgeted` is zero.
    pub fn add(&self, data: &mut FinanceData, new: NewBudget) -> Budget {
        let budget = Budget {
            id: next_id(data.budgets.iter().map(|b| b.id)),
            category: new.category,
            budgeted: new.budgeted,
            spent: 0.0,
            period: new.period,
            color: new.color,
            status: BudgetStatus::UnderBudget,
        };
        data.budgets.push(budget.clone());
        budget
    }

    /// Merge a patch into the budget with `id`. Status is left as-is even
    /// if `budgeted` or `spent` changed.
    pub fn update(&self, data: &mut FinanceData, id: u64, patch: BudgetPatch) -> bool {
        match data.budgets.iter_mut().find(|b| b.id == id) {
            Some(budget) => {
                budget.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, data: &mut FinanceData, id: u64) -> Option<Budget> {
        let idx = data.budgets.iter().position(|b| b.id == id)?;
        Some(data.budgets.remove(idx))
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
