//! Parser for `edit_transaction`

use crate::commands::{EditTransactionCommand, EditTransactionDescriptor};
use crate::error::UniCashError;
use crate::models::{Amount, CategoryList, DateTime, Location, Name, TransactionType};
use crate::parser::tokenizer::{
    tokenize, PREFIX_AMOUNT, PREFIX_CATEGORY, PREFIX_DATETIME, PREFIX_LOCATION, PREFIX_NAME,
    PREFIX_TYPE,
};

pub fn parse(arguments: &str) -> Result<EditTransactionCommand, UniCashError> {
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

    let index = super::parse_index(map.preamble()).map_err(|_| {
        UniCashError::invalid_command_format(EditTransactionCommand::MESSAGE_USAGE)
    })?;

    let mut descriptor = EditTransactionDescriptor::default();
    if let Some(value) = map.value(PREFIX_NAME) {
        descriptor.name = Some(Name::new(value)?);
    }
    if let Some(value) = map.value(PREFIX_TYPE) {
        descriptor.transaction_type = Some(TransactionType::parse(value)?);
    }
    if let Some(value) = map.value(PREFIX_AMOUNT) {
        descriptor.amount = Some(Amount::parse(value)?);
    }
    if let Some(value) = map.value(PREFIX_DATETIME) {
        descriptor.datetime = Some(if value.is_empty() {
            DateTime::now()
        } else {
            DateTime::parse(value)?
        });
    }
    if let Some(value) = map.value(PREFIX_LOCATION) {
        descriptor.location = Some(Location::new(value)?);
    }
    descriptor.categories = parse_categories_for_edit(&map.all(PREFIX_CATEGORY))?;

    if !descriptor.is_any_field_edited() {
        return Err(UniCashError::Parse(
            EditTransactionCommand::MESSAGE_NOT_EDITED.to_string(),
        ));
    }

    Ok(EditTransactionCommand::new(index, descriptor))
}

/// No `c/` keeps the categories; a single empty `c/` clears them all
fn parse_categories_for_edit(values: &[&str]) -> Result<Option<CategoryList>, UniCashError> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(CategoryList::empty()));
    }
    super::parse_categories(values).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_partial_edit() {
        let command = parse("2 a/15.00 l/Science canteen").unwrap();

        assert_eq!(command.index, 2);
        assert_eq!(command.descriptor.amount, Some(Amount::from_cents(1500)));
        assert_eq!(
            command.descriptor.location.as_ref().map(|l| l.as_str()),
            Some("Science canteen")
        );
        assert!(command.descriptor.name.is_none());
        assert!(command.descriptor.transaction_type.is_none());
        assert!(command.descriptor.datetime.is_none());
        assert!(command.descriptor.categories.is_none());
    }

    #[test]
    fn test_bad_index_shows_usage() {
        for arguments in ["n/Lunch", "0 n/Lunch", "-1 n/Lunch", "+1 n/Lunch", "x n/Lunch"] {
            let err = parse(arguments).unwrap_err();
            let message = err.to_string();
            assert!(message.starts_with("Invalid command format!"), "{}", message);
            assert!(message.contains(EditTransactionCommand::MESSAGE_USAGE));
        }
    }

    #[test]
    fn test_no_fields_is_rejected() {
        let err = parse("1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one field to edit must be provided."
        );
    }

    #[test]
    fn test_single_empty_category_prefix_clears() {
        let command = parse("1 c/").unwrap();
        assert_eq!(command.descriptor.categories, Some(CategoryList::empty()));
    }

    #[test]
    fn test_categories_replace_the_whole_set() {
        let command = parse("1 c/food c/friends").unwrap();
        let expected = CategoryList::new(vec![
            Category::new("food").unwrap(),
            Category::new("friends").unwrap(),
        ])
        .unwrap();
        assert_eq!(command.descriptor.categories, Some(expected));
    }

    #[test]
    fn test_empty_category_among_others_is_invalid() {
        let err = parse("1 c/ c/food").unwrap_err();
        assert_eq!(err.to_string(), Category::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_invalid_field_value_surfaces_its_constraint() {
        let err = parse("1 a/-5").unwrap_err();
        assert_eq!(err.to_string(), Amount::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_empty_datetime_value_means_now() {
        let command = parse("1 d/").unwrap();
        assert!(command.descriptor.datetime.is_some());
    }

    #[test]
    fn test_repeated_field_keeps_last_value() {
        let command = parse("1 n/First n/Second").unwrap();
        assert_eq!(
            command.descriptor.name.as_ref().map(|n| n.as_str()),
            Some("Second")
        );
    }
}
