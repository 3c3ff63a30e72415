//! Core data models for UniCash
//!
//! This module contains all the data structures that represent the
//! finance-tracking domain: transactions and their typed fields, the
//! unique transaction list, and the top-level record with its summaries.

pub mod amount;
pub mod category;
pub mod datetime;
pub mod location;
pub mod name;
pub mod transaction;
pub mod transaction_list;
pub mod transaction_type;
pub mod unicash;

pub use amount::Amount;
pub use category::{Category, CategoryList};
pub use datetime::{DateTime, YearMonth};
pub use location::Location;
pub use name::Name;
pub use transaction::Transaction;
pub use transaction_list::TransactionList;
pub use transaction_type::TransactionType;
pub use unicash::{UniCash, UNCATEGORIZED};
