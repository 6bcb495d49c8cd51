use chrono::{Datelike, Days, NaiveDate};
use clap::ValueEnum;

use crate::ledger::ExpenseRecord;

// "week" is the trailing window ending today, not a calendar week
const WEEK_IN_DAYS: u64 = 7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PeriodSelector {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl PeriodSelector {
    pub fn label(&self) -> &'static str {
        match self {
            PeriodSelector::Today => "Today",
            PeriodSelector::Week => "Last 7 days",
            PeriodSelector::Month => "This month",
            PeriodSelector::All => "All time",
        }
    }

    /// First date covered by the period, `None` when the period has no lower bound.
    /// No period has an upper bound: dates after `today` are always covered.
    pub fn start_date(&self, today: &NaiveDate) -> Option<NaiveDate> {
        match self {
            PeriodSelector::Today => Some(*today),
            PeriodSelector::Week => today.checked_sub_days(Days::new(WEEK_IN_DAYS)),
            PeriodSelector::Month => today.with_day(1),
            PeriodSelector::All => None,
        }
    }

    pub fn contains(&self, date: &NaiveDate, today: &NaiveDate) -> bool {
        match self {
            PeriodSelector::Today => date == today,
            _ => match self.start_date(today) {
                Some(start_date) => *date >= start_date,
                None => true,
            },
        }
    }
}

/// The records falling in `selector`'s period, in their original order.
pub fn select_period<'a>(
    records: &'a [ExpenseRecord],
    selector: PeriodSelector,
    today: &NaiveDate,
) -> Vec<&'a ExpenseRecord> {
    records
        .iter()
        .filter(|record| selector.contains(&record.date, today))
        .collect()
}
