//! Edit a transaction in place

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::Model;
use crate::models::{Amount, CategoryList, DateTime, Location, Name, Transaction, TransactionType};

/// The fields an edit supplies. `None` keeps the existing value;
/// `categories: Some(empty)` wipes the whole category set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditTransactionDescriptor {
    pub name: Option<Name>,
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<Amount>,
    pub datetime: Option<DateTime>,
    pub location: Option<Location>,
    pub categories: Option<CategoryList>,
}

impl EditTransactionDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.transaction_type.is_some()
            || self.amount.is_some()
            || self.datetime.is_some()
            || self.location.is_some()
            || self.categories.is_some()
    }

    /// Overlay the supplied fields on `target`
    fn apply_to(&self, target: &Transaction) -> Transaction {
        Transaction::new(
            self.name.clone().unwrap_or_else(|| target.name.clone()),
            self.transaction_type.unwrap_or(target.transaction_type),
            self.amount.unwrap_or(target.amount),
            self.datetime.unwrap_or(target.datetime),
            self.location.clone().unwrap_or_else(|| target.location.clone()),
            self.categories
                .clone()
                .unwrap_or_else(|| target.categories.clone()),
        )
    }
}

/// Replaces the fields of the transaction at a 1-based position in the
/// displayed list
#[derive(Debug, Clone, PartialEq)]
pub struct EditTransactionCommand {
    pub index: usize,
    pub descriptor: EditTransactionDescriptor,
}

impl EditTransactionCommand {
    pub const COMMAND_WORD: &'static str = "edit_transaction";
    pub const MESSAGE_USAGE: &'static str =
        "edit_transaction: Edits the details of the transaction identified by the index \
        number used in the displayed transaction list. Existing values will be overwritten \
        by the input values.\n\
        \n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [t/TYPE] [a/AMOUNT] \
        [d/DATETIME] [l/LOCATION] [c/CATEGORY]...\n\
        \n\
        Example: edit_transaction 1 n/Buying groceries a/15.00";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    pub fn new(index: usize, descriptor: EditTransactionDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, UniCashError> {
        let visible = model.filtered_transactions();
        let target = self
            .index
            .checked_sub(1)
            .and_then(|i| visible.get(i))
            .ok_or(UniCashError::IndexOutOfBounds {
                index: self.index,
                size: visible.len(),
            })?;
        let target = (*target).clone();

        let edited = self.descriptor.apply_to(&target);
        if target != edited && model.has_transaction(&edited) {
            return Err(UniCashError::DuplicateTransaction);
        }

        model.set_transaction(&target, edited.clone())?;
        model.show_all();
        Ok(CommandResult::new(format!("Edited Transaction: {}", edited)))
    }
}
