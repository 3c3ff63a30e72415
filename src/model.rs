//! In-memory application state
//!
//! `Model` pairs the financial record with the view filter that decides
//! which transactions the register shows. Index-based commands resolve
//! their targets against the filtered view, so the filter is part of the
//! state, not a display concern.

use crate::config::{GuiSettings, UserPrefs};
use crate::error::UniCashError;
use crate::models::{Category, Transaction, UniCash};

/// Criteria for narrowing the visible transaction list.
///
/// Every criterion left unset matches all transactions; set criteria
/// must all hold for a transaction to stay visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the name
    pub name_keyword: Option<String>,
    /// Category the transaction must carry, compared ignoring case
    pub category_keyword: Option<Category>,
    /// Case-insensitive substring of the location
    pub location_keyword: Option<String>,
}

impl TransactionFilter {
    /// A filter matching every transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Match names containing `keyword`
    pub fn name(mut self, keyword: &str) -> Self {
        self.name_keyword = Some(keyword.to_string());
        self
    }

    /// Match transactions carrying `category`
    pub fn category(mut self, category: Category) -> Self {
        self.category_keyword = Some(category);
        self
    }

    /// Match locations containing `keyword`
    pub fn location(mut self, keyword: &str) -> Self {
        self.location_keyword = Some(keyword.to_string());
        self
    }

    /// True when no criteria are set
    pub fn is_empty(&self) -> bool {
        self.name_keyword.is_none()
            && self.category_keyword.is_none()
            && self.location_keyword.is_none()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(keyword) = &self.name_keyword {
            if !contains_ignore_case(transaction.name.as_str(), keyword) {
                return false;
            }
        }
        if let Some(category) = &self.category_keyword {
            if !transaction.categories.contains_ignore_case(category.as_str()) {
                return false;
            }
        }
        if let Some(keyword) = &self.location_keyword {
            if !contains_ignore_case(transaction.location.as_str(), keyword) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Application state: the record, the user's preferences and the
/// current view filter
#[derive(Debug, Clone, Default)]
pub struct Model {
    unicash: UniCash,
    prefs: UserPrefs,
    filter: TransactionFilter,
}

impl Model {
    /// Start from existing data, showing all transactions
    pub fn new(unicash: UniCash) -> Self {
        Self::with_prefs(unicash, UserPrefs::default())
    }

    /// Start from existing data and loaded preferences
    pub fn with_prefs(unicash: UniCash, prefs: UserPrefs) -> Self {
        Self {
            unicash,
            prefs,
            filter: TransactionFilter::new(),
        }
    }

    pub fn unicash(&self) -> &UniCash {
        &self.unicash
    }

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.prefs.gui_settings = gui_settings;
    }

    /// Throw away all data
    pub fn reset_data(&mut self, new_data: UniCash) {
        self.unicash.reset_data(new_data);
    }

    pub fn has_transaction(&self, transaction: &Transaction) -> bool {
        self.unicash.has_transaction(transaction)
    }

    /// Add a transaction and widen the view so the new entry is visible
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), UniCashError> {
        self.unicash.add_transaction(transaction)?;
        self.show_all();
        Ok(())
    }

    /// Remove a transaction; the view filter stays as it is
    pub fn delete_transaction(&mut self, target: &Transaction) -> Result<(), UniCashError> {
        self.unicash.remove_transaction(target)
    }

    /// Swap `target` for `edited`; the caller decides whether to reset the view
    pub fn set_transaction(
        &mut self,
        target: &Transaction,
        edited: Transaction,
    ) -> Result<(), UniCashError> {
        self.unicash.set_transaction(target, edited)
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: TransactionFilter) {
        self.filter = filter;
    }

    /// Reset the view to show every transaction
    pub fn show_all(&mut self) {
        self.filter = TransactionFilter::new();
    }

    /// The visible transactions, in underlying list order
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.unicash
            .transaction_list()
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }
}
