//! Command objects
//!
//! One struct per user-facing command. Parsing builds these; `execute`
//! applies them to the model and reports back through [`CommandResult`].
//! Commands never touch storage or the terminal.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod summary;

pub use add::AddTransactionCommand;
pub use clear::ClearTransactionsCommand;
pub use delete::DeleteTransactionCommand;
pub use edit::{EditTransactionCommand, EditTransactionDescriptor};
pub use exit::ExitCommand;
pub use find::FindTransactionCommand;
pub use help::HelpCommand;
pub use list::ListTransactionCommand;
pub use summary::SummaryCommand;

use crate::error::UniCashError;
use crate::model::Model;

/// What a command wants the shell to do after it ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,
    /// Ask the shell to print the command catalog
    pub show_help: bool,
    /// Ask the shell to terminate
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn with_help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn with_exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// A fully parsed command, ready to run against the model
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddTransactionCommand),
    Edit(EditTransactionCommand),
    Delete(DeleteTransactionCommand),
    Clear(ClearTransactionsCommand),
    Find(FindTransactionCommand),
    List(ListTransactionCommand),
    Summary(SummaryCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Run the command. On error the model is left exactly as it was.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, UniCashError> {
        match self {
            Command::Add(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::Delete(command) => command.execute(model),
            Command::Clear(command) => command.execute(model),
            Command::Find(command) => command.execute(model),
            Command::List(command) => command.execute(model),
            Command::Summary(command) => command.execute(model),
            Command::Help(command) => command.execute(model),
            Command::Exit(command) => command.execute(model),
        }
    }
}
