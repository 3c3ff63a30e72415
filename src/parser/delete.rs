//! Parser for `delete_transaction`

use crate::commands::DeleteTransactionCommand;
use crate::error::UniCashError;

pub fn parse(arguments: &str) -> Result<DeleteTransactionCommand, UniCashError> {
    super::parse_index(arguments)
        .map(DeleteTransactionCommand::new)
        .map_err(|_| {
            UniCashError::invalid_command_format(DeleteTransactionCommand::MESSAGE_USAGE)
        })
}
