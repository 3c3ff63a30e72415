//! Parser for `find_transaction`

use crate::commands::FindTransactionCommand;
use crate::error::UniCashError;
use crate::model::TransactionFilter;
use crate::models::Category;
use crate::parser::tokenizer::{tokenize, PREFIX_CATEGORY, PREFIX_LOCATION, PREFIX_NAME};

pub fn parse(arguments: &str) -> Result<FindTransactionCommand, UniCashError> {
    let map = tokenize(arguments, &[PREFIX_NAME, PREFIX_CATEGORY, PREFIX_LOCATION]);

    if !map.preamble().is_empty() {
        return Err(UniCashError::invalid_command_format(
            FindTransactionCommand::MESSAGE_USAGE,
        ));
    }

    let mut filter = TransactionFilter::new();
    if let Some(value) = map.value(PREFIX_NAME) {
        if value.is_empty() {
            return Err(UniCashError::invalid_command_format(
                FindTransactionCommand::MESSAGE_USAGE,
            ));
        }
        filter = filter.name(value);
    }
    if let Some(value) = map.value(PREFIX_CATEGORY) {
        filter = filter.category(Category::new(value)?);
    }
    if let Some(value) = map.value(PREFIX_LOCATION) {
        if value.is_empty() {
            return Err(UniCashError::invalid_command_format(
                FindTransactionCommand::MESSAGE_USAGE,
            ));
        }
        filter = filter.location(value);
    }

    if filter.is_empty() {
        return Err(UniCashError::invalid_command_format(
            FindTransactionCommand::MESSAGE_USAGE,
        ));
    }

    Ok(FindTransactionCommand::new(filter))
}
