//! Figures derived from the ledger. Everything is recomputed from the full
//! list of records on every call, nothing is cached between calls.

mod balance;
mod trends;

pub use balance::{compute_balance, BalanceSnapshot, Severity};
pub use trends::{compute_trends, CategoryShare, TrendsSnapshot};

use crate::amounts::Figure;
use crate::ledger::ExpenseRecord;

fn total(records: &[&ExpenseRecord]) -> Figure {
    records.iter().map(|record| record.amount).sum()
}
