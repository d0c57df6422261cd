use crate::models::finance_data::FinanceData;
use crate::models::transaction::{NewTransaction, Transaction, TransactionKind, TransactionPatch};

use super::next_id;

/// Outcome of adding a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedTransaction {
    /// The stored record, with id assigned and sign normalized.
    pub transaction: Transaction,

    /// Ids of the budgets whose `spent` was increased.
    pub affected_budgets: Vec<u64>,
}

/// Creates, patches and removes transactions, and pushes expense amounts
/// into matching budgets.
///
/// Pure business logic over [`FinanceData`]; no notifications, no I/O.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Insert a new transaction at the front of the collection.
    ///
    /// - id = max(existing ids, 0) + 1
    /// - amount sign follows `kind`, whatever the caller passed
    /// - expenses add |amount| to every budget with the same category name
    ///   and re-classify those budgets
    ///
    /// NaN amounts are stored as-is and flow into budget `spent`.
    pub fn add(&self, data: &mut FinanceData, new: NewTransaction) -> AddedTransaction {
        let id = next_id(data.transactions.iter().map(|t| t.id));
        let transaction = Transaction {
            id,
            amount: new.kind.normalize_amount(new.amount),
            description: new.description,
            kind: new.kind,
            date: new.date,
            category: new.category,
            account: new.account,
        };

        let affected_budgets = if transaction.kind == TransactionKind::Expense {
            Self::charge_budgets(data, &transaction.category, transaction.amount)
        } else {
            Vec::new()
        };

        data.transactions.insert(0, transaction.clone());

        AddedTransaction {
            transaction,
            affected_budgets,
        }
    }

    /// Merge a patch into the transaction with `id`.
    /// Returns `false` if no such transaction exists.
    pub fn update(&self, data: &mut FinanceData, id: u64, patch: TransactionPatch) -> bool {
        match data.transactions.iter_mut().find(|t| t.id == id) {
            Some(transaction) => {
                transaction.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Remove the transaction with `id`. Budgets it was charged to keep
    /// their `spent`.
    pub fn remove(&self, data: &mut FinanceData, id: u64) -> Option<Transaction> {
        let idx = data.transactions.iter().position(|t| t.id == id)?;
        Some(data.transactions.remove(idx))
    }

    fn charge_budgets(data: &mut FinanceData, category: &str, amount: f64) -> Vec<u64> {
        data.budgets
            .iter_mut()
            .filter(|b| b.category == category)
            .map(|budget| {
                budget.record_spending(amount);
                budget.id
            })
            .collect()
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
