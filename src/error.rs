//! Custom error types for UniCash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for UniCash operations
#[derive(Error, Debug)]
pub enum UniCashError {
    /// A field value violates that field's format or range constraint.
    /// Always raised at value-object construction, carrying the field's
    /// fixed constraint message.
    #[error("{0}")]
    Validation(&'static str),

    /// Command text does not match the expected grammar (missing prefix,
    /// bad index, unknown command word). Carries the offending command's
    /// usage string where one applies.
    #[error("{0}")]
    Parse(String),

    /// Adding or editing would create a value-equal duplicate of an
    /// existing transaction
    #[error("This transaction already exists in UniCash")]
    DuplicateTransaction,

    /// A 1-based index outside the bounds of the currently displayed list
    #[error("The transaction index provided is invalid")]
    IndexOutOfBounds { index: usize, size: usize },

    /// The targeted transaction is not present in the list
    #[error("Transaction not found in UniCash")]
    TransactionNotFound,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl UniCashError {
    /// Create a parse error for text that does not fit a command's
    /// grammar, embedding the command's usage string
    pub fn invalid_command_format(usage: &str) -> Self {
        Self::Parse(format!("Invalid command format! \n{}", usage))
    }

    /// Create a parse error for a command word missing from the registry
    pub fn unknown_command() -> Self {
        Self::Parse("Unknown command. Type 'help' to view all available commands.".to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a duplicate-transaction error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateTransaction)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for UniCashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for UniCashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for UniCash operations
pub type UniCashResult<T> = Result<T, UniCashError>;
