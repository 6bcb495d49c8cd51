use chrono::{NaiveDate, Utc};
use mockall_double::double;
use tracing::{debug, info, warn};

use crate::aggregates::{compute_balance, compute_trends, BalanceSnapshot, TrendsSnapshot};
use crate::amounts::{in_accepted_range, Figure};
use crate::category::Category;
#[double]
use crate::clock::SystemClock;
use crate::errors::Result;
use crate::ledger::{ExpenseId, ExpenseRecord};
use crate::period::{select_period, PeriodSelector};
use crate::store::LedgerStore;
use crate::vault::Vault;

/// Entry point for the user-facing layer. Every call works on a fresh
/// snapshot of the stored ledger.
pub struct ExpenseTracker<V: Vault> {
    store: LedgerStore<V>,
    clock: SystemClock,
}

impl<V: Vault> ExpenseTracker<V> {
    pub fn new(store: LedgerStore<V>, clock: SystemClock) -> ExpenseTracker<V> {
        ExpenseTracker { store, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Records a new expense, identified by the current time in milliseconds.
    /// Amounts outside `(0, MAX_AMOUNT]` are ignored and return `None`.
    pub fn add_expense(
        &self,
        amount: Figure,
        category: Category,
        description: &str,
        date: NaiveDate,
    ) -> Result<Option<ExpenseRecord>> {
        if !in_accepted_range(amount) {
            warn!(%amount, "Ignoring expense with an amount out of range");
            return Ok(None);
        }

        let now = self.clock.now();
        let mut ledger = self.store.load();

        let record = ExpenseRecord {
            id: next_id(now.timestamp_millis(), ledger.last_id()),
            amount,
            category,
            description: description.to_string(),
            date,
            created_at: now.with_timezone(&Utc),
        };
        ledger.expenses.push(record.clone());
        self.store.save_expenses(&ledger.expenses)?;

        info!(id = record.id, %amount, ?category, %date, "Added expense");
        Ok(Some(record))
    }

    /// Returns whether the salary was saved. Values outside `(0, MAX_AMOUNT]`
    /// are ignored.
    pub fn update_salary(&self, value: Figure) -> Result<bool> {
        if !in_accepted_range(value) {
            warn!(%value, "Ignoring salary out of range");
            return Ok(false);
        }

        self.store.save_salary(value)?;
        info!(%value, "Updated monthly salary");
        Ok(true)
    }

    /// Returns whether a record was removed. Unknown ids leave storage untouched.
    pub fn delete_expense(&self, id: ExpenseId) -> Result<bool> {
        let ledger = self.store.load();
        if !ledger.contains(id) {
            debug!(id, "No expense to delete");
            return Ok(false);
        }

        self.store.save_expenses(&ledger.delete_record(id).expenses)?;
        info!(id, "Deleted expense");
        Ok(true)
    }

    pub fn balance_snapshot(&self, today: &NaiveDate) -> BalanceSnapshot {
        compute_balance(&self.store.load(), today)
    }

    pub fn trends_snapshot(&self, today: &NaiveDate) -> TrendsSnapshot {
        compute_trends(&self.store.load(), today)
    }

    /// Newest first. Expenses sharing a date keep the order they were stored in.
    pub fn list_expenses(&self, selector: PeriodSelector, today: &NaiveDate) -> Vec<ExpenseRecord> {
        let ledger = self.store.load();
        let mut expenses: Vec<ExpenseRecord> = select_period(&ledger.expenses, selector, today)
            .into_iter()
            .cloned()
            .collect();
        expenses.sort_by(|left, right| right.date.cmp(&left.date));
        expenses
    }
}

// Two expenses added within the same millisecond still get distinct ids
fn next_id(now_millis: i64, last_id: Option<ExpenseId>) -> ExpenseId {
    match last_id {
        Some(last_id) if last_id >= now_millis => last_id + 1,
        _ => now_millis,
    }
}
