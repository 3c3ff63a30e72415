//! Amount type for transaction values
//!
//! Internally stores amounts in cents (u64) to avoid floating-point precision
//! issues. Amounts are always non-negative; the transaction type records
//! whether money flowed in or out.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

/// Represents a non-negative monetary amount stored as cents
/// (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Constraint message shown when an amount fails to parse
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Amounts should be non-negative numbers with at most 2 decimal places.";

    /// Create an Amount from cents
    ///
    /// # Examples
    /// ```
    /// use unicash::models::Amount;
    /// let amount = Amount::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Get the whole dollars portion
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse an amount from its accepted text format
    ///
    /// Accepts a non-negative decimal with at most 2 fraction digits and an
    /// optional leading currency symbol: "10.50", "$10.50", "10", "0.05".
    pub fn parse(s: &str) -> Result<Self, UniCashError> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);

        if s.is_empty() {
            return Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS));
        }

        let (dollars_str, cents_str) = match s.split_once('.') {
            Some((dollars, cents)) => (dollars, cents),
            None => (s, ""),
        };

        if dollars_str.is_empty() || !dollars_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS));
        }

        let dollars: u64 = dollars_str
            .parse()
            .map_err(|_| UniCashError::Validation(Self::MESSAGE_CONSTRAINTS))?;

        let cents: u64 = match cents_str.len() {
            0 => 0,
            1 | 2 => {
                if !cents_str.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS));
                }
                let fraction: u64 = cents_str
                    .parse()
                    .map_err(|_| UniCashError::Validation(Self::MESSAGE_CONSTRAINTS))?;
                if cents_str.len() == 1 {
                    fraction * 10
                } else {
                    fraction
                }
            }
            _ => return Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS)),
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS))
    }
}

impl FromStr for Amount {
    type Err = UniCashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.cents_part())
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
