//! Ordered, duplicate-rejecting transaction container
//!
//! The list enforces one invariant: no two elements are value-equal. All
//! mutation goes through the checked operations here, and outside callers
//! only ever see read-only views. A version counter bumps on every
//! mutation so the presentation layer can poll for changes instead of
//! subscribing to them.

use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

use super::transaction::Transaction;

/// An ordered sequence of unique transactions
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Transaction>", into = "Vec<Transaction>")]
pub struct TransactionList {
    transactions: Vec<Transaction>,
    version: u64,
}

impl TransactionList {
    /// An empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an equal transaction is already in the list
    pub fn contains(&self, transaction: &Transaction) -> bool {
        self.transactions.contains(transaction)
    }

    /// Append a transaction, rejecting a value-equal duplicate
    pub fn add(&mut self, transaction: Transaction) -> Result<(), UniCashError> {
        if self.contains(&transaction) {
            return Err(UniCashError::DuplicateTransaction);
        }
        self.transactions.push(transaction);
        self.version += 1;
        Ok(())
    }

    /// Replace `target` with `edited`, keeping the target's position.
    ///
    /// Fails if `target` is not in the list, or if `edited` equals a
    /// *different* element. Replacing a transaction with itself succeeds.
    pub fn replace(
        &mut self,
        target: &Transaction,
        edited: Transaction,
    ) -> Result<(), UniCashError> {
        let index = self
            .transactions
            .iter()
            .position(|t| t == target)
            .ok_or(UniCashError::TransactionNotFound)?;

        if target != &edited && self.contains(&edited) {
            return Err(UniCashError::DuplicateTransaction);
        }

        self.transactions[index] = edited;
        self.version += 1;
        Ok(())
    }

    /// Remove the transaction equal to `target`
    pub fn remove(&mut self, target: &Transaction) -> Result<(), UniCashError> {
        let index = self
            .transactions
            .iter()
            .position(|t| t == target)
            .ok_or(UniCashError::TransactionNotFound)?;
        self.transactions.remove(index);
        self.version += 1;
        Ok(())
    }

    /// Replace the whole contents, rejecting input containing duplicates
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) -> Result<(), UniCashError> {
        if !transactions_are_unique(&transactions) {
            return Err(UniCashError::DuplicateTransaction);
        }
        self.transactions = transactions;
        self.version += 1;
        Ok(())
    }

    /// Read-only view of the transactions in list order
    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Iterate the transactions in list order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Counter incremented by every successful mutation. Callers can
    /// compare versions to detect changes without subscribing.
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl PartialEq for TransactionList {
    /// Version counters are presentation state, not data; equality looks
    /// at the transactions only
    fn eq(&self, other: &Self) -> bool {
        self.transactions == other.transactions
    }
}

impl<'a> IntoIterator for &'a TransactionList {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

impl TryFrom<Vec<Transaction>> for TransactionList {
    type Error = UniCashError;

    fn try_from(transactions: Vec<Transaction>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        list.set_transactions(transactions)?;
        Ok(list)
    }
}

impl From<TransactionList> for Vec<Transaction> {
    fn from(list: TransactionList) -> Self {
        list.transactions
    }
}

fn transactions_are_unique(transactions: &[Transaction]) -> bool {
    for (i, a) in transactions.iter().enumerate() {
        if transactions[i + 1..].contains(a) {
            return false;
        }
    }
    true
}
