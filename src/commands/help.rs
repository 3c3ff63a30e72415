//! Show the command catalog

use crate::commands::CommandResult;
use crate::error::UniCashError;
use crate::model::Model;

/// Asks the shell to print usage for every command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
        \n\
        Example: help";
    pub const MESSAGE_SHOWING_HELP: &'static str = "Showing all available commands.";

    pub fn execute(&self, _model: &mut Model) -> Result<CommandResult, UniCashError> {
        Ok(CommandResult::with_help(Self::MESSAGE_SHOWING_HELP))
    }
}
