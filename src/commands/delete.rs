//! Delete a transaction

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::Model;

/// Deletes the transaction at a 1-based position in the displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTransactionCommand {
    pub index: usize,
}

impl DeleteTransactionCommand {
    pub const COMMAND_WORD: &'static str = "delete_transaction";
    pub const MESSAGE_USAGE: &'static str =
        "delete_transaction: Deletes the transaction identified by the index number used \
        in the displayed transaction list.\n\
        \n\
        Parameters: INDEX (must be a positive integer)\n\
        \n\
        Example: delete_transaction 1";

    pub fn new(index: usize) -> Self {
        Self { index }
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

        model.delete_transaction(&target)?;
        Ok(CommandResult::new(format!("Deleted Transaction: {}", target)))
    }
}
