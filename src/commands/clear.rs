//! Clear all transactions

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::Model;
use crate::models::UniCash;

/// Wipes the whole record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearTransactionsCommand;

impl ClearTransactionsCommand {
    pub const COMMAND_WORD: &'static str = "clear_transactions";
    pub const MESSAGE_USAGE: &'static str =
        "clear_transactions: Clears all existing transactions.\n\
        \n\
        Example: clear_transactions";
    pub const MESSAGE_SUCCESS: &'static str = "All transactions have been cleared!";

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, UniCashError> {
        model.reset_data(UniCash::new());
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
