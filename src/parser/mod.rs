//! Command-language parsing
//!
//! Turns a raw input line into a [`Command`]. The command word is looked
//! up exactly (case-sensitive) in a static registry; the rest of the
//! line goes to that command's own parser. Everything the parser rejects
//! carries either the offending field's constraint message or the
//! command's usage text.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod tokenizer;

use crate::commands::{
    AddTransactionCommand, ClearTransactionsCommand, Command, DeleteTransactionCommand,
    EditTransactionCommand, ExitCommand, FindTransactionCommand, HelpCommand,
    ListTransactionCommand, SummaryCommand,
};
use crate::error::UniCashError;
use crate::models::{Category, CategoryList};

/// A command word together with its usage text
#[derive(Debug, Clone)]
pub struct CommandEntry {
    /// What the user types
    pub word: &'static str,
    /// Full usage text shown by `help`
    pub usage: &'static str,
}

/// Every command the program understands
pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        word: AddTransactionCommand::COMMAND_WORD,
        usage: AddTransactionCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: EditTransactionCommand::COMMAND_WORD,
        usage: EditTransactionCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: DeleteTransactionCommand::COMMAND_WORD,
        usage: DeleteTransactionCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: ClearTransactionsCommand::COMMAND_WORD,
        usage: ClearTransactionsCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: FindTransactionCommand::COMMAND_WORD,
        usage: FindTransactionCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: ListTransactionCommand::COMMAND_WORD,
        usage: ListTransactionCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: SummaryCommand::COMMAND_WORD,
        usage: SummaryCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: HelpCommand::COMMAND_WORD,
        usage: HelpCommand::MESSAGE_USAGE,
    },
    CommandEntry {
        word: ExitCommand::COMMAND_WORD,
        usage: ExitCommand::MESSAGE_USAGE,
    },
];

/// Look up a command word in the registry
pub fn find_command(word: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.word == word)
}

/// Error message for an index that is not a positive integer
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parse a whole input line into an executable command
pub fn parse_command(input: &str) -> Result<Command, UniCashError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UniCashError::invalid_command_format(
            HelpCommand::MESSAGE_USAGE,
        ));
    }

    let (word, arguments) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    if word == AddTransactionCommand::COMMAND_WORD {
        add::parse(arguments).map(Command::Add)
    } else if word == EditTransactionCommand::COMMAND_WORD {
        edit::parse(arguments).map(Command::Edit)
    } else if word == DeleteTransactionCommand::COMMAND_WORD {
        delete::parse(arguments).map(Command::Delete)
    } else if word == ClearTransactionsCommand::COMMAND_WORD {
        ensure_no_arguments(arguments, ClearTransactionsCommand::MESSAGE_USAGE)?;
        Ok(Command::Clear(ClearTransactionsCommand))
    } else if word == FindTransactionCommand::COMMAND_WORD {
        find::parse(arguments).map(Command::Find)
    } else if word == ListTransactionCommand::COMMAND_WORD {
        ensure_no_arguments(arguments, ListTransactionCommand::MESSAGE_USAGE)?;
        Ok(Command::List(ListTransactionCommand))
    } else if word == SummaryCommand::COMMAND_WORD {
        ensure_no_arguments(arguments, SummaryCommand::MESSAGE_USAGE)?;
        Ok(Command::Summary(SummaryCommand))
    } else if word == HelpCommand::COMMAND_WORD {
        ensure_no_arguments(arguments, HelpCommand::MESSAGE_USAGE)?;
        Ok(Command::Help(HelpCommand))
    } else if word == ExitCommand::COMMAND_WORD {
        ensure_no_arguments(arguments, ExitCommand::MESSAGE_USAGE)?;
        Ok(Command::Exit(ExitCommand))
    } else {
        Err(UniCashError::unknown_command())
    }
}

/// Parse a 1-based display index. Rejects zero, signs and non-digits.
pub fn parse_index(text: &str) -> Result<usize, UniCashError> {
    let trimmed = text.trim();
    // usize::from_str accepts a leading '+'; the command language does not
    if trimmed.starts_with('+') {
        return Err(UniCashError::Parse(MESSAGE_INVALID_INDEX.to_string()));
    }
    match trimmed.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(UniCashError::Parse(MESSAGE_INVALID_INDEX.to_string())),
    }
}

fn ensure_no_arguments(arguments: &str, usage: &str) -> Result<(), UniCashError> {
    if arguments.trim().is_empty() {
        Ok(())
    } else {
        Err(UniCashError::invalid_command_format(usage))
    }
}

/// Parse every `c/` value into a category list
pub(crate) fn parse_categories(values: &[&str]) -> Result<CategoryList, UniCashError> {
    let categories = values
        .iter()
        .map(|value| Category::new(value))
        .collect::<Result<Vec<_>, _>>()?;
    CategoryList::new(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_word_is_registered() {
        for word in [
            "add_transaction",
            "edit_transaction",
            "delete_transaction",
            "clear_transactions",
            "find_transaction",
            "list_transaction",
            "summary",
            "help",
            "exit",
        ] {
            assert!(find_command(word).is_some(), "missing {}", word);
        }
        assert_eq!(COMMANDS.len(), 9);
    }

    #[test]
    fn test_unknown_word_is_rejected() {
        let err = parse_command("fly_me_to_the_moon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown command. Type 'help' to view all available commands."
        );
    }

    #[test]
    fn test_command_words_are_case_sensitive() {
        assert!(parse_command("ADD_TRANSACTION n/Lunch t/expense a/5").is_err());
        assert!(parse_command("Help").is_err());
    }

    #[test]
    fn test_empty_input_is_invalid_format() {
        let err = parse_command("   ").unwrap_err();
        assert!(err.to_string().starts_with("Invalid command format!"));
    }

    #[test]
    fn test_word_only_commands_reject_trailing_text() {
        for line in [
            "clear_transactions now",
            "list_transaction 5",
            "summary please",
            "help me",
            "exit 0",
        ] {
            let err = parse_command(line).unwrap_err();
            assert!(
                err.to_string().starts_with("Invalid command format!"),
                "{} should be rejected",
                line
            );
        }
    }

    #[test]
    fn test_word_only_commands_parse() {
        assert!(matches!(
            parse_command("clear_transactions"),
            Ok(Command::Clear(_))
        ));
        assert!(matches!(
            parse_command("list_transaction"),
            Ok(Command::List(_))
        ));
        assert!(matches!(parse_command("summary"), Ok(Command::Summary(_))));
        assert!(matches!(parse_command("help"), Ok(Command::Help(_))));
        assert!(matches!(parse_command("exit"), Ok(Command::Exit(_))));
    }

    #[test]
    fn test_parse_index_accepts_positive_integers() {
        assert_eq!(parse_index("1").unwrap(), 1);
        assert_eq!(parse_index("  42  ").unwrap(), 42);
        // leading zeros are harmless
        assert_eq!(parse_index("007").unwrap(), 7);
    }

    #[test]
    fn test_parse_index_rejects_everything_else() {
        for text in ["0", "-1", "+1", "1.5", "one", "", "  ", "1 2"] {
            let err = parse_index(text).unwrap_err();
            assert_eq!(err.to_string(), MESSAGE_INVALID_INDEX, "input {:?}", text);
        }
    }
}
