use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::amounts::{Rupees, MAX_AMOUNT};
use crate::category::Category;
use crate::ledger::ExpenseId;
use crate::period::PeriodSelector;

fn parse_figure(s: &str) -> Result<Decimal, String> {
    let figure = Decimal::from_str_exact(s.trim()).map_err(|_| {
        format!(
            "Could not decode amount {}: Format is a decimal number, eg. 1200.50",
            &s
        )
    })?;
    if figure > MAX_AMOUNT {
        return Err(format!(
            "Could not accept amount {}: The largest accepted amount is {}",
            &s,
            Rupees(MAX_AMOUNT)
        ));
    }
    Ok(figure)
}

fn parse_description(s: &str) -> Result<String, String> {
    let description = s.trim();
    if description.is_empty() {
        return Err("The description cannot be empty".to_string());
    }
    Ok(description.to_string())
}

#[derive(Parser)]
#[command(
    name = "spent",
    version = env!("RELEASE"),
    about = "Track daily expenses against a monthly salary"
)]
pub struct SpentOptions {
    /// Directory holding the ledger, defaults to the current directory
    #[arg(long, env = "SPENT_VAULT", global = true)]
    pub vault: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record an expense
    Add {
        #[arg(value_parser = parse_figure, allow_negative_numbers = true)]
        amount: Decimal,

        #[arg(value_enum)]
        category: Category,

        #[arg(value_parser = parse_description)]
        description: String,

        /// Day of the expense (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Set the monthly salary
    Salary {
        #[arg(value_parser = parse_figure, allow_negative_numbers = true)]
        value: Decimal,
    },

    /// Delete an expense by id
    Delete { id: ExpenseId },

    /// Show this month's budget, spending and remaining balance
    Balance,

    /// Show today's, this week's and this month's spending by category
    Trends,

    /// List expenses, newest first
    List {
        #[arg(short, long, value_enum, default_value_t = PeriodSelector::All)]
        period: PeriodSelector,
    },
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::Parser;
    use rust_decimal_macros::dec;

    use super::{parse_figure, Command, SpentOptions};
    use crate::category::Category;
    use crate::period::PeriodSelector;

    fn parse(arguments: &[&str]) -> SpentOptions {
        SpentOptions::try_parse_from(arguments).unwrap()
    }

    #[test]
    fn parse_figure__decimal() {
        assert_eq!(parse_figure("1200.50").unwrap(), dec!(1200.50))
    }

    #[test]
    fn parse_figure__not_a_number() {
        assert_eq!(
            parse_figure("twelve").unwrap_err(),
            "Could not decode amount twelve: Format is a decimal number, eg. 1200.50"
        )
    }

    #[test]
    fn parse_figure__above_largest_amount() {
        assert_eq!(
            parse_figure("1000000000000000000000000000").unwrap_err(),
            "Could not accept amount 1000000000000000000000000000: \
             The largest accepted amount is ₹1,00,00,00,00,00,00,000"
        )
    }

    #[test]
    fn parse_figure__largest_amount() {
        assert_eq!(parse_figure("1000000000000000").unwrap(), dec!(1000000000000000))
    }

    #[test]
    fn add__all_arguments() {
        let options = parse(&[
            "spent", "--vault", "/tmp/ledger", "add", "1200", "food", "Lunch", "--date", "2024-03-15",
        ]);

        assert_eq!(
            options.vault.unwrap().to_str().unwrap(),
            "/tmp/ledger"
        );
        match options.command {
            Command::Add {
                amount,
                category,
                description,
                date,
            } => {
                assert_eq!(amount, dec!(1200));
                assert_eq!(category, Category::Food);
                assert_eq!(description, "Lunch");
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15));
            }
            _ => panic!("Expected the add command"),
        }
    }

    #[test]
    fn add__unknown_category() {
        assert!(SpentOptions::try_parse_from(["spent", "add", "10", "groceries", "Milk"]).is_err())
    }

    #[test]
    fn add__blank_description() {
        assert!(SpentOptions::try_parse_from(["spent", "add", "10", "food", "  "]).is_err())
    }

    #[test]
    fn salary__negative_value_reaches_the_tracker() {
        match parse(&["spent", "salary", "-5"]).command {
            Command::Salary { value } => assert_eq!(value, dec!(-5)),
            _ => panic!("Expected the salary command"),
        }
    }

    #[test]
    fn list__defaults_to_all() {
        match parse(&["spent", "list"]).command {
            Command::List { period } => assert_eq!(period, PeriodSelector::All),
            _ => panic!("Expected the list command"),
        }
    }

    #[test]
    fn list__period() {
        match parse(&["spent", "list", "-p", "week"]).command {
            Command::List { period } => assert_eq!(period, PeriodSelector::Week),
            _ => panic!("Expected the list command"),
        }
    }
}
