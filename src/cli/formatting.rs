use chrono::{Days, NaiveDate};
use comfy_table::{Cell, CellAlignment, Table};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::aggregates::{BalanceSnapshot, CategoryShare, TrendsSnapshot};
use crate::amounts::{Percentage, Rupees};
use crate::ledger::ExpenseRecord;
use crate::period::PeriodSelector;

// Width of a full bar in the category breakdown, in characters
const BAR_WIDTH: u32 = 20;

pub fn format_balance_screen(balance: &BalanceSnapshot) -> String {
    let mut table = Table::new();
    table.add_row(amount_row("Monthly budget", Rupees(balance.monthly_budget)));
    table.add_row(amount_row(
        "Total spent this month",
        Rupees(balance.total_spent_this_month),
    ));
    table.add_row(amount_row("Remaining", Rupees(balance.remaining)));
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(balance.severity().label()).set_alignment(CellAlignment::Right),
    ]);

    format!("{}\n{}", title("Monthly balance"), table)
}

pub fn format_trends_screen(trends: &TrendsSnapshot) -> String {
    let mut totals = Table::new();
    totals.add_row(amount_row(PeriodSelector::Today.label(), Rupees(trends.today_total)));
    totals.add_row(amount_row(PeriodSelector::Week.label(), Rupees(trends.week_total)));
    totals.add_row(amount_row(PeriodSelector::Month.label(), Rupees(trends.month_total)));

    let breakdown = if trends.category_breakdown.is_empty() {
        "No data to display yet".to_string()
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Category", "Amount", "Share", ""]);
        for share in trends.category_breakdown.iter() {
            table.add_row(vec![
                Cell::new(share.category.to_string()),
                Cell::new(Rupees(share.amount).to_string()).set_alignment(CellAlignment::Right),
                Cell::new(Percentage(share.percentage).to_string())
                    .set_alignment(CellAlignment::Right),
                Cell::new(bar(share)),
            ]);
        }
        table.to_string()
    };

    [
        format!("{}\n{}", title("Spending"), totals),
        format!("{}\n{}", title("Category breakdown this month"), breakdown),
    ]
    .join("\n\n")
}

pub fn format_expense_list(
    expenses: &[ExpenseRecord],
    selector: PeriodSelector,
    today: &NaiveDate,
) -> String {
    let heading = title(&format!("Expenses: {}", selector.label()));
    if expenses.is_empty() {
        return format!("{}\nNo expenses found", heading);
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Category", "Description", "Date", "Amount"]);
    for expense in expenses {
        table.add_row(vec![
            Cell::new(expense.id),
            Cell::new(expense.category.to_string()),
            Cell::new(&expense.description),
            Cell::new(format_relative_date(&expense.date, today)),
            Cell::new(Rupees(expense.amount).to_string()).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n{}", heading, table)
}

/// "Today", "Yesterday", otherwise the date as `15 Mar 2024`
pub fn format_relative_date(date: &NaiveDate, today: &NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.checked_sub_days(Days::new(1)).as_ref() == Some(date) {
        return "Yesterday".to_string();
    }
    date.format("%-d %b %Y").to_string()
}

fn amount_row(label: &str, amount: Rupees) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(amount.to_string()).set_alignment(CellAlignment::Right),
    ]
}

fn bar(share: &CategoryShare) -> String {
    let filled = (share.percentage * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0);
    "█".repeat(filled)
}

pub fn title(string: &str) -> String {
    let string_length = string.chars().count();
    string.to_string() + "\n" + &"=".repeat(string_length)
}
