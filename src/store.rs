use tracing::debug;

use crate::amounts::Figure;
use crate::errors::Result;
use crate::ledger::{ExpenseRecord, Expenses, Ledger, MonthlySalary};
use crate::vault::{Vault, VaultReadable, VaultWritable};

/// Owns the persisted ledger. Readers get snapshots, writers replace a whole slot.
pub struct LedgerStore<V: Vault> {
    vault: V,
}

impl<V: Vault> LedgerStore<V> {
    pub fn new(vault: V) -> LedgerStore<V> {
        LedgerStore { vault }
    }

    /// Never fails: missing or malformed content reads as an empty ledger.
    pub fn load(&self) -> Ledger {
        let ledger = Ledger {
            expenses: Expenses::from_vault(&self.vault),
            monthly_salary: MonthlySalary::from_vault(&self.vault).0,
        };
        debug!(
            expenses = ledger.expenses.len(),
            monthly_salary = %ledger.monthly_salary,
            "Loaded ledger"
        );
        ledger
    }

    pub fn save_expenses(&self, expenses: &[ExpenseRecord]) -> Result<()> {
        expenses.to_vec().to_vault(&self.vault)
    }

    pub fn save_salary(&self, monthly_salary: Figure) -> Result<()> {
        MonthlySalary(monthly_salary).to_vault(&self.vault)
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tempfile::tempdir;

    use super::LedgerStore;
    use crate::category::Category;
    use crate::ledger::fixtures::{date, Expense};
    use crate::ledger::Ledger;
    use crate::vault::{FileVault, MemoryVault, Vault};

    fn ledger() -> Ledger {
        Ledger {
            expenses: vec![
                Expense::default()
                    .id(1710504000000)
                    .amount(dec!(1200))
                    .category(Category::Food)
                    .date(date(2024, 3, 15))
                    .record(),
                Expense::default()
                    .id(1710504000001)
                    .amount(dec!(99.5))
                    .category(Category::Health)
                    .date(date(2024, 2, 1))
                    .record(),
            ],
            monthly_salary: dec!(50000),
        }
    }

    fn save(store: &LedgerStore<impl Vault>, ledger: &Ledger) {
        store.save_expenses(&ledger.expenses).unwrap();
        store.save_salary(ledger.monthly_salary).unwrap();
    }

    #[test]
    fn load__nothing_saved() {
        let store = LedgerStore::new(MemoryVault::default());

        assert_eq!(store.load(), Ledger::default())
    }

    #[test]
    fn load__after_save() {
        let store = LedgerStore::new(MemoryVault::default());

        save(&store, &ledger());

        assert_eq!(store.load(), ledger())
    }

    #[test]
    fn load__after_save__file_vault() {
        let directory = tempdir().unwrap();
        let store = LedgerStore::new(FileVault {
            path: directory.path().to_path_buf(),
        });

        save(&store, &ledger());

        let reopened = LedgerStore::new(FileVault {
            path: directory.path().to_path_buf(),
        });
        assert_eq!(reopened.load(), ledger())
    }

    #[test]
    fn save_expenses__overwrites_previous_list() {
        let store = LedgerStore::new(MemoryVault::default());
        save(&store, &ledger());

        store.save_expenses(&[]).unwrap();

        assert_eq!(
            store.load(),
            Ledger {
                expenses: vec![],
                monthly_salary: dec!(50000),
            }
        )
    }

    #[test]
    fn load__malformed_salary_keeps_expenses() {
        let vault = MemoryVault::default();
        vault.write_value("monthlySalary", json!({"amount": 1})).unwrap();
        let store = LedgerStore::new(vault);
        store.save_expenses(&ledger().expenses).unwrap();

        assert_eq!(
            store.load(),
            Ledger {
                expenses: ledger().expenses,
                monthly_salary: dec!(0),
            }
        )
    }

    #[test]
    fn load__malformed_expenses_keeps_salary() {
        let vault = MemoryVault::default();
        vault.write_value("expenses", json!("[oops")).unwrap();
        let store = LedgerStore::new(vault);
        store.save_salary(dec!(100)).unwrap();

        assert_eq!(
            store.load(),
            Ledger {
                expenses: vec![],
                monthly_salary: dec!(100),
            }
        )
    }

    #[test]
    fn load__after_save__keeps_every_digit() {
        let directory = tempdir().unwrap();
        let store = LedgerStore::new(FileVault {
            path: directory.path().to_path_buf(),
        });
        let ledger = Ledger {
            expenses: vec![
                Expense::default().id(1).amount(dec!(12345678901234.567)).record(),
                Expense::default().id(2).amount(dec!(0.123456789012345678)).record(),
            ],
            monthly_salary: dec!(98765432109876.543),
        };

        save(&store, &ledger);

        assert_eq!(store.load(), ledger)
    }
}
