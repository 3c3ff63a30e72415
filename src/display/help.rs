//! Help catalog formatting

use crate::parser::COMMANDS;

/// Render usage for every command, in registry order
pub fn format_help() -> String {
    let mut output = String::from("Available commands:\n");
    for entry in COMMANDS {
        output.push('\n');
        output.push_str(entry.usage);
        output.push('\n');
    }
    output
}
