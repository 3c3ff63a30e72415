//! Transaction name value object

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:][:punct:]][[:alnum:][:punct:] ]*$").expect("name pattern compiles")
});

/// A transaction's name. Immutable and guaranteed valid once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Constraint message shown when a name fails validation
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters, spaces and punctuation, \
         should not start with a space, and should be at most 500 characters long.";

    /// Maximum accepted length in characters
    pub const MAX_LENGTH: usize = 500;

    /// Construct a Name, validating the input
    pub fn new(name: &str) -> Result<Self, UniCashError> {
        if Self::is_valid(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS))
        }
    }

    /// Returns true if the given string is a valid transaction name
    pub fn is_valid(name: &str) -> bool {
        name.chars().count() <= Self::MAX_LENGTH && NAME_REGEX.is_match(name)
    }

    /// The full name as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = UniCashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = UniCashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
