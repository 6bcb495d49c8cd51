use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::total;
use crate::amounts::Figure;
use crate::category::Category;
use crate::ledger::{ExpenseRecord, Ledger};
use crate::period::{select_period, PeriodSelector};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Figure,
    /// Share of the total, in percent, rounded to one decimal
    pub percentage: Figure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendsSnapshot {
    pub today_total: Figure,
    pub week_total: Figure,
    pub month_total: Figure,
    /// Current month only, largest amount first
    pub category_breakdown: Vec<CategoryShare>,
}

pub fn compute_trends(ledger: &Ledger, today: &NaiveDate) -> TrendsSnapshot {
    let this_month = select_period(&ledger.expenses, PeriodSelector::Month, today);

    TrendsSnapshot {
        today_total: total(&select_period(&ledger.expenses, PeriodSelector::Today, today)),
        week_total: total(&select_period(&ledger.expenses, PeriodSelector::Week, today)),
        month_total: total(&this_month),
        category_breakdown: category_breakdown(&this_month),
    }
}

/// Sums `records` per category. Categories with equal sums keep the order in
/// which they first appear in `records`.
pub fn category_breakdown(records: &[&ExpenseRecord]) -> Vec<CategoryShare> {
    let mut sums: Vec<(Category, Figure)> = Vec::new();
    for record in records {
        match sums.iter_mut().find(|(category, _)| *category == record.category) {
            Some((_, sum)) => *sum += record.amount,
            None => sums.push((record.category, record.amount)),
        }
    }

    let total: Figure = sums.iter().map(|(_, sum)| *sum).sum();
    if total.is_zero() {
        return Vec::new();
    }

    // Stable, ties stay in first-seen order
    sums.sort_by(|(_, left), (_, right)| right.cmp(left));

    sums.into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            // Divide first, `amount <= total` keeps the quotient at most one
            percentage: (amount / total * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect()
}
