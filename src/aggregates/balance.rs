use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::total;
use crate::amounts::Figure;
use crate::ledger::Ledger;
use crate::period::{select_period, PeriodSelector};

// Below this share of the budget the remaining balance is flagged
const WARNING_SHARE: Decimal = dec!(0.2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Healthy,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Healthy => "healthy",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub monthly_budget: Figure,
    pub total_spent_this_month: Figure,
    /// Negative once the month's spending exceeds the budget
    pub remaining: Figure,
}

impl BalanceSnapshot {
    /// With a zero budget the warning threshold is zero too, so any
    /// non-negative balance is healthy.
    pub fn severity(&self) -> Severity {
        if self.remaining < Decimal::ZERO {
            Severity::Critical
        } else if self.remaining < self.monthly_budget * WARNING_SHARE {
            Severity::Warning
        } else {
            Severity::Healthy
        }
    }
}

pub fn compute_balance(ledger: &Ledger, today: &NaiveDate) -> BalanceSnapshot {
    let this_month = select_period(&ledger.expenses, PeriodSelector::Month, today);
    let total_spent_this_month = total(&this_month);

    BalanceSnapshot {
        monthly_budget: ledger.monthly_salary,
        total_spent_this_month,
        remaining: ledger.monthly_salary - total_spent_this_month,
    }
}
