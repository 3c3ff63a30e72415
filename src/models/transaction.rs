//! Transaction model
//!
//! An immutable composite of the six transaction fields. Two transactions
//! are equal iff every field is equal; categories compare as sets. Edits
//! never mutate in place: they build a new Transaction that replaces the
//! old one.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::category::CategoryList;
use super::datetime::DateTime;
use super::location::Location;
use super::name::Name;
use super::transaction_type::TransactionType;

/// A single financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// What the money was for
    pub name: Name,

    /// Whether this is an expense or income
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// How much money moved
    pub amount: Amount,

    /// When the transaction happened
    pub datetime: DateTime,

    /// Where the transaction happened
    #[serde(default)]
    pub location: Location,

    /// The categories this transaction is filed under
    #[serde(default)]
    pub categories: CategoryList,
}

impl Transaction {
    /// Create a new transaction from validated fields
    pub fn new(
        name: Name,
        transaction_type: TransactionType,
        amount: Amount,
        datetime: DateTime,
        location: Location,
        categories: CategoryList,
    ) -> Self {
        Self {
            name,
            transaction_type,
            amount,
            datetime,
            location,
            categories,
        }
    }

    /// Check if this transaction is an expense
    pub fn is_expense(&self) -> bool {
        self.transaction_type.is_expense()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Type: {}; Amount: {}; Date: {}; Location: {}; Categories: {}",
            self.name,
            self.transaction_type,
            self.amount,
            self.datetime,
            self.location,
            self.categories
        )
    }
}
