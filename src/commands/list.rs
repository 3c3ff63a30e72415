//! List all transactions

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::Model;

/// Resets the displayed list to show every transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTransactionCommand;

impl ListTransactionCommand {
    pub const COMMAND_WORD: &'static str = "list_transaction";
    pub const MESSAGE_USAGE: &'static str = "list_transaction: Lists all transactions.\n\
        \n\
        Example: list_transaction";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all transactions";

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, UniCashError> {
        model.show_all();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
