//! Summarize expenses

use crate::commands::CommandResult;
use crate::display::format_summary;
use crate::error::UniCashError;
use crate::model::Model;

/// Reports expense totals per category and per month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCommand;

impl SummaryCommand {
    pub const COMMAND_WORD: &'static str = "summary";
    pub const MESSAGE_USAGE: &'static str =
        "summary: Displays a summary of all the expenses.\n\
        \n\
        Example: summary";
    pub const MESSAGE_NO_EXPENSES: &'static str = "You have no expenses to summarize.";

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, UniCashError> {
        if !model.unicash().has_expenses() {
            return Ok(CommandResult::new(Self::MESSAGE_NO_EXPENSES));
        }
        Ok(CommandResult::new(format_summary(model.unicash())))
    }
}
