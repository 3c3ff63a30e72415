//! Display formatting for terminal output
//!
//! Renders model state as plain text for the shell: the transaction
//! register, the expense summary tables and the help catalog.

pub mod help;
pub mod register;
pub mod summary;

pub use help::format_help;
pub use register::{format_register, format_transaction_row};
pub use summary::format_summary;
