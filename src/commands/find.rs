//! Find transactions by keyword

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::{Model, TransactionFilter};

/// Narrows the displayed list to transactions matching every given keyword
#[derive(Debug, Clone, PartialEq)]
pub struct FindTransactionCommand {
    pub filter: TransactionFilter,
}

impl FindTransactionCommand {
    pub const COMMAND_WORD: &'static str = "find_transaction";
    pub const MESSAGE_USAGE: &'static str =
        "find_transaction: Finds all transactions whose fields match all of the provided \
        keywords and displays them as a list with index numbers.\n\
        \n\
        Parameters: [n/NAME] [c/CATEGORY] [l/LOCATION]\n\
        \n\
        Example: find_transaction n/chicken rice";

    pub fn new(filter: TransactionFilter) -> Self {
        Self { filter }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, UniCashError> {
        model.set_filter(self.filter.clone());
        Ok(CommandResult::new(format!(
            "{} transactions listed!",
            model.filtered_transactions().len()
        )))
    }
}
