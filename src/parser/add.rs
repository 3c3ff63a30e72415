//! Parser for `add_transaction`

use crate::commands::AddTransactionCommand;
use crate::error::UniCashError;
use crate::models::{Amount, DateTime, Location, Name, Transaction, TransactionType};
use crate::parser::tokenizer::{
    tokenize, PREFIX_AMOUNT, PREFIX_CATEGORY, PREFIX_DATETIME, PREFIX_LOCATION, PREFIX_NAME,
    PREFIX_TYPE,
};

pub fn parse(arguments: &str) -> Result<AddTransactionCommand, UniCashError> {
    let map = tokenize(
        arguments,
        &[
            PREFIX_NAME,
            PREFIX_TYPE,
            PREFIX_AMOUNT,
            PREFIX_DATETIME,
            PREFIX_LOCATION,
            PREFIX_CATEGORY,
        ],
    );

    if !map.preamble().is_empty() {
        return Err(UniCashError::invalid_command_format(
            AddTransactionCommand::MESSAGE_USAGE,
        ));
    }
    let (Some(name), Some(transaction_type), Some(amount)) = (
        map.value(PREFIX_NAME),
        map.value(PREFIX_TYPE),
        map.value(PREFIX_AMOUNT),
    ) else {
        return Err(UniCashError::invalid_command_format(
            AddTransactionCommand::MESSAGE_USAGE,
        ));
    };

    let name = Name::new(name)?;
    let transaction_type = TransactionType::parse(transaction_type)?;
    let amount = Amount::parse(amount)?;
    let datetime = match map.value(PREFIX_DATETIME) {
        Some(value) if !value.is_empty() => DateTime::parse(value)?,
        _ => DateTime::now(),
    };
    let location = match map.value(PREFIX_LOCATION) {
        Some(value) => Location::new(value)?,
        None => Location::empty(),
    };
    let categories = super::parse_categories(&map.all(PREFIX_CATEGORY))?;

    Ok(AddTransactionCommand::new(Transaction::new(
        name,
        transaction_type,
        amount,
        datetime,
        location,
        categories,
    )))
}
