//! Transaction location value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

/// Where a transaction took place. Free text; blank input normalizes to
/// the "-" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Constraint message shown when a location fails validation
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Locations can be any text up to 500 characters long.";

    /// Maximum accepted length in characters
    pub const MAX_LENGTH: usize = 500;

    /// Placeholder stored when no location was given
    pub const EMPTY_PLACEHOLDER: &'static str = "-";

    /// Construct a Location. Blank input becomes the placeholder.
    pub fn new(location: &str) -> Result<Self, UniCashError> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Ok(Self(Self::EMPTY_PLACEHOLDER.to_string()));
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// A Location carrying the placeholder value
    pub fn empty() -> Self {
        Self(Self::EMPTY_PLACEHOLDER.to_string())
    }

    /// The location as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Location {
    type Err = UniCashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Location {
    type Error = UniCashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
