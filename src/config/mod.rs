//! Configuration module for UniCash
//!
//! This module provides configuration management including:
//! - Platform path resolution with an env-var override
//! - User preferences persistence

pub mod paths;
pub mod prefs;

pub use paths::UniCashPaths;
pub use prefs::{GuiSettings, UserPrefs};
