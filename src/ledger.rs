use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

use crate::amounts::{in_accepted_range, Figure, MAX_AMOUNT};
use crate::category::Category;
use crate::errors::Result;
use crate::vault::{VaultKey, VaultReadable, VaultWritable};

pub type ExpenseId = i64;

/// One spending event. Never modified once recorded, only deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Figure,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    fn is_valid(&self) -> bool {
        in_accepted_range(self.amount)
    }
}

pub type Expenses = Vec<ExpenseRecord>;

impl VaultKey for Expenses {
    const KEY: &'static str = "expenses";
}

impl VaultReadable for Expenses {
    /// Each entry is decoded on its own, a malformed entry is dropped without
    /// losing the rest of the list.
    fn from_vault_value(value: Value) -> Self {
        let Value::Array(entries) = value else {
            warn!("Stored expenses are not a list, ignoring them");
            return Vec::new();
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                match serde_json::from_value::<ExpenseRecord>(entry) {
                    Ok(record) if record.is_valid() => Some(record),
                    Ok(record) => {
                        warn!(index, id = record.id, "Dropping stored expense with an amount out of range");
                        None
                    }
                    Err(error) => {
                        warn!(index, %error, "Dropping malformed stored expense");
                        None
                    }
                }
            })
            .collect()
    }
}

impl VaultWritable for Expenses {
    fn to_vault_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// The salary slot, stored as the text of the number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonthlySalary(pub Figure);

impl VaultKey for MonthlySalary {
    const KEY: &'static str = "monthlySalary";
}

impl VaultReadable for MonthlySalary {
    fn from_vault_value(value: Value) -> Self {
        let figure = match &value {
            Value::String(text) => Decimal::from_str(text.trim()).ok(),
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .or_else(|_| Decimal::from_scientific(&number.to_string()))
                .ok(),
            _ => None,
        };

        match figure {
            Some(figure) if figure >= Decimal::ZERO && figure <= MAX_AMOUNT => {
                MonthlySalary(figure)
            }
            _ => {
                warn!(stored = %value, "Ignoring malformed stored salary");
                MonthlySalary::default()
            }
        }
    }
}

impl VaultWritable for MonthlySalary {
    fn to_vault_value(&self) -> Result<Value> {
        Ok(Value::String(self.0.to_string()))
    }
}

/// Every recorded expense plus the monthly salary they are measured against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    pub expenses: Expenses,
    pub monthly_salary: Figure,
}

impl Ledger {
    /// Returns the ledger without the record carrying `id`. Unknown ids leave
    /// the ledger as it was.
    pub fn delete_record(&self, id: ExpenseId) -> Ledger {
        Ledger {
            expenses: self
                .expenses
                .iter()
                .filter(|record| record.id != id)
                .cloned()
                .collect(),
            monthly_salary: self.monthly_salary,
        }
    }

    pub fn contains(&self, id: ExpenseId) -> bool {
        self.expenses.iter().any(|record| record.id == id)
    }

    pub fn last_id(&self) -> Option<ExpenseId> {
        self.expenses.iter().map(|record| record.id).max()
    }
}
