//! Top-level financial record
//!
//! `UniCash` wraps the transaction list and is the unit that storage
//! serializes. The summary folds live here too: expenses grouped by
//! calendar month and by category, both returned as sorted maps so
//! rendering order is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

use super::amount::Amount;
use super::datetime::YearMonth;
use super::transaction::Transaction;
use super::transaction_list::TransactionList;

/// Label used when summing expenses that carry no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The whole financial record: every transaction the user has entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniCash {
    transactions: TransactionList,
}

impl UniCash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all data with another record's
    pub fn reset_data(&mut self, new_data: UniCash) {
        // route through set_transactions so the version counter advances
        let transactions: Vec<Transaction> = new_data.transactions.into();
        // the source list already held them, so uniqueness cannot fail
        let _ = self.transactions.set_transactions(transactions);
    }

    pub fn has_transaction(&self, transaction: &Transaction) -> bool {
        self.transactions.contains(transaction)
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), UniCashError> {
        self.transactions.add(transaction)
    }

    pub fn remove_transaction(&mut self, target: &Transaction) -> Result<(), UniCashError> {
        self.transactions.remove(target)
    }

    pub fn set_transaction(
        &mut self,
        target: &Transaction,
        edited: Transaction,
    ) -> Result<(), UniCashError> {
        self.transactions.replace(target, edited)
    }

    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) -> Result<(), UniCashError> {
        self.transactions.set_transactions(transactions)
    }

    pub fn transaction_list(&self) -> &TransactionList {
        &self.transactions
    }

    pub fn has_expenses(&self) -> bool {
        self.transactions.iter().any(Transaction::is_expense)
    }

    /// Total expense amount per category name.
    ///
    /// A transaction with several categories contributes its full amount
    /// to each of them; one with none counts under [`UNCATEGORIZED`].
    /// Income is ignored.
    pub fn expenses_by_category(&self) -> BTreeMap<String, Amount> {
        let mut sums: BTreeMap<String, Amount> = BTreeMap::new();
        for transaction in self.transactions.iter().filter(|t| t.is_expense()) {
            if transaction.categories.is_empty() {
                *sums.entry(UNCATEGORIZED.to_string()).or_default() += transaction.amount;
            } else {
                for category in transaction.categories.iter() {
                    *sums.entry(category.as_str().to_string()).or_default() += transaction.amount;
                }
            }
        }
        sums
    }

    /// Total expense amount per calendar month, oldest first
    pub fn expenses_by_month(&self) -> BTreeMap<YearMonth, Amount> {
        let mut sums: BTreeMap<YearMonth, Amount> = BTreeMap::new();
        for transaction in self.transactions.iter().filter(|t| t.is_expense()) {
            *sums.entry(transaction.datetime.year_month()).or_default() += transaction.amount;
        }
        sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryList, DateTime, Location, Name, TransactionType};

    fn entry(
        name: &str,
        transaction_type: TransactionType,
        cents: u64,
        datetime: &str,
        categories: &[&str],
    ) -> Transaction {
        let categories = categories
            .iter()
            .map(|c| Category::new(c).unwrap())
            .collect();
        Transaction::new(
            Name::new(name).unwrap(),
            transaction_type,
            Amount::from_cents(cents),
            DateTime::parse(datetime).unwrap(),
            Location::empty(),
            CategoryList::new(categories).unwrap(),
        )
    }

    #[test]
    fn test_reset_data_replaces_contents() {
        let mut unicash = UniCash::new();
        unicash
            .add_transaction(entry(
                "Old",
                TransactionType::Expense,
                100,
                "01-01-2024 09:00",
                &[],
            ))
            .unwrap();

        let mut fresh = UniCash::new();
        fresh
            .add_transaction(entry(
                "New",
                TransactionType::Income,
                200,
                "02-01-2024 09:00",
                &[],
            ))
            .unwrap();

        unicash.reset_data(fresh.clone());
        assert_eq!(unicash, fresh);
        assert_eq!(unicash.transaction_list().len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut unicash = UniCash::new();
        let lunch = entry(
            "Lunch",
            TransactionType::Expense,
            850,
            "15-01-2024 12:30",
            &["food"],
        );
        unicash.add_transaction(lunch.clone()).unwrap();
        assert!(unicash.has_transaction(&lunch));
        assert!(unicash.add_transaction(lunch).unwrap_err().is_duplicate());
    }

    #[test]
    fn test_summary_folds_ignore_income() {
        let mut unicash = UniCash::new();
        unicash
            .add_transaction(entry(
                "Groceries",
                TransactionType::Expense,
                1000,
                "05-01-2024 10:00",
                &["Food"],
            ))
            .unwrap();
        unicash
            .add_transaction(entry(
                "Restaurant",
                TransactionType::Expense,
                2000,
                "20-01-2024 19:00",
                &["Food"],
            ))
            .unwrap();
        unicash
            .add_transaction(entry(
                "Salary",
                TransactionType::Income,
                10000,
                "28-01-2024 09:00",
                &["Food"],
            ))
            .unwrap();

        let by_category = unicash.expenses_by_category();
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category["Food"], Amount::from_cents(3000));

        let by_month = unicash.expenses_by_month();
        assert_eq!(by_month.len(), 1);
        let january = YearMonth {
            year: 2024,
            month: 1,
        };
        assert_eq!(by_month[&january], Amount::from_cents(3000));
    }

    #[test]
    fn test_uncategorized_expenses_get_the_placeholder_bucket() {
        let mut unicash = UniCash::new();
        unicash
            .add_transaction(entry(
                "Mystery",
                TransactionType::Expense,
                500,
                "05-01-2024 10:00",
                &[],
            ))
            .unwrap();

        let by_category = unicash.expenses_by_category();
        assert_eq!(by_category[UNCATEGORIZED], Amount::from_cents(500));
    }

    #[test]
    fn test_multi_category_expense_counts_in_each_bucket() {
        let mut unicash = UniCash::new();
        unicash
            .add_transaction(entry(
                "Conference dinner",
                TransactionType::Expense,
                4000,
                "05-03-2024 20:00",
                &["food", "work"],
            ))
            .unwrap();

        let by_category = unicash.expenses_by_category();
        assert_eq!(by_category["food"], Amount::from_cents(4000));
        assert_eq!(by_category["work"], Amount::from_cents(4000));
    }

    #[test]
    fn test_months_sort_chronologically() {
        let mut unicash = UniCash::new();
        unicash
            .add_transaction(entry(
                "December",
                TransactionType::Expense,
                100,
                "05-12-2023 10:00",
                &[],
            ))
            .unwrap();
        unicash
            .add_transaction(entry(
                "February",
                TransactionType::Expense,
                300,
                "05-02-2024 10:00",
                &[],
            ))
            .unwrap();
        unicash
            .add_transaction(entry(
                "January",
                TransactionType::Expense,
                200,
                "05-01-2024 10:00",
                &[],
            ))
            .unwrap();

        let months: Vec<YearMonth> = unicash.expenses_by_month().into_keys().collect();
        assert_eq!(
            months,
            vec![
                YearMonth {
                    year: 2023,
                    month: 12,
                },
                YearMonth {
                    year: 2024,
                    month: 1,
                },
                YearMonth {
                    year: 2024,
                    month: 2,
                },
            ]
        );
    }

    #[test]
    fn test_has_expenses() {
        let mut unicash = UniCash::new();
        assert!(!unicash.has_expenses());

        unicash
            .add_transaction(entry(
                "Salary",
                TransactionType::Income,
                10000,
                "28-01-2024 09:00",
                &[],
            ))
            .unwrap();
        assert!(!unicash.has_expenses());

        unicash
            .add_transaction(entry(
                "Coffee",
                TransactionType::Expense,
                450,
                "29-01-2024 08:00",
                &[],
            ))
            .unwrap();
        assert!(unicash.has_expenses());
    }
}
