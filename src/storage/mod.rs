//! Persistence for the UniCash record
//!
//! The whole record serializes to one JSON file. Loading never fails:
//! a missing file seeds illustrative sample data for first-time users,
//! and an unreadable one is reported and replaced by an empty record.
//! Validation happens during deserialization, through the same
//! constructors the parser uses.

pub mod file_io;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::UniCashError;
use crate::models::{
    Amount, Category, CategoryList, DateTime, Location, Name, Transaction, TransactionType,
    UniCash,
};

/// Reads and writes the record at a fixed file location
#[derive(Debug, Clone)]
pub struct UniCashStorage {
    data_file: PathBuf,
}

impl UniCashStorage {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load the record from disk
    pub fn load(&self) -> UniCash {
        if !self.data_file.exists() {
            info!(
                "No data file at {}, starting with sample data",
                self.data_file.display()
            );
            return sample_unicash();
        }

        match file_io::read_json(&self.data_file) {
            Ok(unicash) => unicash,
            Err(e) => {
                warn!("{}. Starting with an empty record", e);
                UniCash::new()
            }
        }
    }

    /// Persist the record, atomically
    pub fn save(&self, unicash: &UniCash) -> Result<(), UniCashError> {
        file_io::write_json_atomic(&self.data_file, unicash)
    }
}

/// The record a first-time user starts with
pub fn sample_unicash() -> UniCash {
    build_sample().expect("sample transactions are valid")
}

fn build_sample() -> Result<UniCash, UniCashError> {
    let mut unicash = UniCash::new();
    unicash.add_transaction(sample_transaction(
        "Evening with friends",
        TransactionType::Expense,
        "17.40",
        "17-09-2023 19:30",
        "Clarke Quay",
        &["Social"],
    )?)?;
    unicash.add_transaction(sample_transaction(
        "Buying groceries",
        TransactionType::Expense,
        "34.50",
        "05-10-2023 18:30",
        "NTUC",
        &["Household"],
    )?)?;
    unicash.add_transaction(sample_transaction(
        "Internship allowance",
        TransactionType::Income,
        "800",
        "01-10-2023 09:00",
        "",
        &["Work"],
    )?)?;
    Ok(unicash)
}

fn sample_transaction(
    name: &str,
    transaction_type: TransactionType,
    amount: &str,
    datetime: &str,
    location: &str,
    categories: &[&str],
) -> Result<Transaction, UniCashError> {
    let categories = categories
        .iter()
        .map(|c| Category::new(c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Transaction::new(
        Name::new(name)?,
        transaction_type,
        Amount::parse(amount)?,
        DateTime::parse(datetime)?,
        Location::new(location)?,
        CategoryList::new(categories)?,
    ))
}
