use crate::models::category::{Category, CategoryPatch, CategoryTrend, NewCategory};
use crate::models::finance_data::FinanceData;

use super::next_id;

/// Creates, patches and removes categories. Renames and deletions do not
/// cascade to transactions or budgets that reference the category by name.
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new category with zeroed aggregates and a stable trend.
    pub fn add(&self, data: &mut FinanceData, new: NewCategory) -> Category {
        let category = Category {
            id: next_id(data.categories.iter().map(|c| c.id)),
            name: new.name,
            kind: new.kind,
            color: new.color,
            total_amount: 0.0,
            transaction_count: 0,
            avg_transaction: 0.0,
            trend: CategoryTrend::Stable,
        };
        data.categories.push(category.clone());
        category
    }

    pub fn update(&self, data: &mut FinanceData, id: u64, patch: CategoryPatch) -> bool {
        match data.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, data: &mut FinanceData, id: u64) -> Option<Category> {
        let idx = data.categories.iter().position(|c| c.id == id)?;
        Some(data.categories.remove(idx))
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
