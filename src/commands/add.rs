//! Add a transaction

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::Model;
use crate::models::Transaction;

/// Adds a fully built transaction to the record
#[derive(Debug, Clone, PartialEq)]
pub struct AddTransactionCommand {
    pub transaction: Transaction,
}

impl AddTransactionCommand {
    pub const COMMAND_WORD: &'static str = "add_transaction";
    pub const MESSAGE_USAGE: &'static str = "add_transaction: Adds a transaction to UniCash.\n\
        \n\
        Parameters: n/NAME t/TYPE a/AMOUNT [d/DATETIME] [l/LOCATION] [c/CATEGORY]...\n\
        \n\
        Example: add_transaction n/Buying groceries t/expense a/300 \
        d/18-08-2023 19:30 l/NTUC c/Household";

    pub fn new(transaction: Transaction) -> Self {
        Self { transaction }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, UniCashError> {
        model.add_transaction(self.transaction.clone())?;
        Ok(CommandResult::new(format!(
            "New transaction added: {}",
            self.transaction
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Amount, CategoryList, DateTime, Location, Name, TransactionType,
    };

    fn lunch() -> Transaction {
        Transaction::new(
            Name::new("Lunch").unwrap(),
            TransactionType::Expense,
            Amount::parse("8.50").unwrap(),
            DateTime::parse("15-01-2024 12:30").unwrap(),
            Location::empty(),
            CategoryList::empty(),
        )
    }

    #[test]
    fn test_execute_adds_and_reports() {
        let mut model = Model::default();
        let result = AddTransactionCommand::new(lunch()).execute(&mut model).unwrap();

        assert!(model.has_transaction(&lunch()));
        assert_eq!(
            result.feedback,
            format!("New transaction added: {}", lunch())
        );
        assert!(!result.show_help);
        assert!(!result.exit);
    }

    #[test]
    fn test_execute_rejects_duplicate() {
        let mut model = Model::default();
        AddTransactionCommand::new(lunch()).execute(&mut model).unwrap();

        let err = AddTransactionCommand::new(lunch())
            .execute(&mut model)
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(model.filtered_transactions().len(), 1);
    }
}
