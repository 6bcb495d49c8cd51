use std::env::current_dir;
use std::process::ExitCode;

use argument_parsing::{Command, SpentOptions};
use clap::Parser;
use mockall_double::double;
use tracing::error;

#[double]
use crate::clock::SystemClock;
use crate::errors::Result;
use crate::store::LedgerStore;
use crate::tracker::ExpenseTracker;
use crate::vault::{FileVault, Vault};

mod argument_parsing;
mod formatting;

pub fn run() -> ExitCode {
    let arguments = SpentOptions::parse();

    let result: Result<String> = (|| {
        let vault_path = match arguments.vault {
            Some(path) => path,
            None => current_dir()?,
        };
        let tracker = ExpenseTracker::new(
            LedgerStore::new(FileVault { path: vault_path }),
            SystemClock::default(),
        );

        execute(arguments.command, &tracker)
    })();

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            println!("Could not run command: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute<V: Vault>(command: Command, tracker: &ExpenseTracker<V>) -> Result<String> {
    let today = tracker.today();

    let output = match command {
        Command::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = date.unwrap_or(today);
            match tracker.add_expense(amount, category, &description, date)? {
                Some(record) => format!(
                    "Expense added successfully! 🎉 (id {})\n\n{}",
                    record.id,
                    formatting::format_balance_screen(&tracker.balance_snapshot(&today))
                ),
                None => "The amount must be greater than zero".to_string(),
            }
        }
        Command::Salary { value } => {
            if tracker.update_salary(value)? {
                format!(
                    "Salary updated successfully! 💰\n\n{}",
                    formatting::format_balance_screen(&tracker.balance_snapshot(&today))
                )
            } else {
                "The salary must be greater than zero".to_string()
            }
        }
        Command::Delete { id } => {
            if tracker.delete_expense(id)? {
                "Expense deleted! 🗑️".to_string()
            } else {
                format!("No expense with id {}", id)
            }
        }
        Command::Balance => formatting::format_balance_screen(&tracker.balance_snapshot(&today)),
        Command::Trends => formatting::format_trends_screen(&tracker.trends_snapshot(&today)),
        Command::List { period } => formatting::format_expense_list(
            &tracker.list_expenses(period, &today),
            period,
            &today,
        ),
    };

    Ok(output)
}
