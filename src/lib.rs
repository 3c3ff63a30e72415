//! UniCash - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the UniCash finance
//! tracker. It records income and expense transactions through a small
//! prefixed command language, keeps them in a single JSON file, and can
//! summarize spending by category and by month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `app`: Application shell tying the model to its storage
//! - `commands`: Executable commands and their results
//! - `config`: Configuration, paths and user preferences
//! - `display`: Plain-text rendering of transactions and summaries
//! - `error`: Custom error types
//! - `model`: In-memory state and the displayed-list filter
//! - `models`: Core data models (transactions and their fields)
//! - `parser`: Command-language parsing
//! - `storage`: JSON file storage layer
//!
//! # Example
//!
//! ```rust,ignore
//! use unicash::app::App;
//! use unicash::config::{UniCashPaths, UserPrefs};
//! use unicash::storage::UniCashStorage;
//!
//! let paths = UniCashPaths::new()?;
//! let prefs = UserPrefs::load_or_default(&paths);
//! let mut app = App::new(UniCashStorage::new(prefs.data_file(&paths)), prefs);
//! let result = app.execute("add_transaction n/Lunch t/expense a/8.50")?;
//! println!("{}", result.feedback);
//! ```

pub mod app;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod models;
pub mod parser;
pub mod storage;

pub use error::UniCashError;
