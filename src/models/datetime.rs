//! Transaction date-time value object
//!
//! Parses and displays a single accepted text format (`dd-MM-yyyy HH:mm`)
//! and derives the calendar year-month used as the summary bucket.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

/// The accepted text format for date-times
const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// A transaction's calendar date and time, at minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    /// Constraint message shown when a date-time fails to parse
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Date-times should be in the dd-MM-yyyy HH:mm format, e.g. 18-08-2023 19:30.";

    /// Parse a date-time from the accepted text format
    pub fn parse(s: &str) -> Result<Self, UniCashError> {
        NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
            .map(Self)
            .map_err(|_| UniCashError::Validation(Self::MESSAGE_CONSTRAINTS))
    }

    /// The current local time, truncated to the minute
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        let truncated = now
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(now);
        Self(truncated)
    }

    /// The year-month this date-time falls in
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}

impl FromStr for DateTime {
    type Err = UniCashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateTime {
    type Error = UniCashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateTime> for String {
    fn from(datetime: DateTime) -> Self {
        datetime.to_string()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

/// A calendar year and month pair, the bucket expenses are summed under.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
