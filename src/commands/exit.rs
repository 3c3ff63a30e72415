//! Exit the program

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::Model;

/// Asks the shell to stop reading input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\n\
        \n\
        Example: exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting UniCash as requested ...";

    pub fn execute(&self, _model: &mut Model) -> Result<CommandResult, UniCashError> {
        Ok(CommandResult::with_exit(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}
