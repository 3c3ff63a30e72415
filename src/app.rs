//! Application shell
//!
//! Owns the model and its storage, and exposes the single entry point
//! the terminal loop calls: parse a line, execute it, persist on
//! success. Every error funnels out of here exactly once; the caller
//! just prints it.

use tracing::info;

use crate::commands::CommandResult;
use crate::config::UserPrefs;
use crate::display;
use crate::error::UniCashError;
use crate::model::Model;
use crate::parser;
use crate::storage::UniCashStorage;

pub struct App {
    model: Model,
    storage: UniCashStorage,
}

impl App {
    /// Load the record from storage and start with it
    pub fn new(storage: UniCashStorage, prefs: UserPrefs) -> Self {
        let model = Model::with_prefs(storage.load(), prefs);
        Self { model, storage }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Parse and run one input line.
    ///
    /// A successful command is persisted before this returns; a failed
    /// one leaves both the model and the data file untouched.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult, UniCashError> {
        info!("command: {}", line.trim());
        let command = parser::parse_command(line)?;
        let result = command.execute(&mut self.model)?;
        self.storage.save(self.model.unicash())?;
        Ok(result)
    }

    /// Render the currently displayed transaction list
    pub fn render_register(&self) -> String {
        display::format_register(&self.model.filtered_transactions())
    }
}
