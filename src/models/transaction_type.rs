//! Transaction type (expense or income)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

/// Whether a transaction moves money out of or into the user's pocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    /// Constraint message shown when a type fails to parse
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Transaction types should either be 'expense' or 'income'.";

    /// Parse a type from text, case-insensitively. Accepts the short
    /// synonyms 'exp' and 'inc'.
    pub fn parse(s: &str) -> Result<Self, UniCashError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" | "exp" => Ok(Self::Expense),
            "income" | "inc" => Ok(Self::Income),
            _ => Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS)),
        }
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl FromStr for TransactionType {
    type Err = UniCashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synonyms() {
        assert_eq!(TransactionType::parse("expense").unwrap(), TransactionType::Expense);
        assert_eq!(TransactionType::parse("exp").unwrap(), TransactionType::Expense);
        assert_eq!(TransactionType::parse("income").unwrap(), TransactionType::Income);
        assert_eq!(TransactionType::parse("inc").unwrap(), TransactionType::Income);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TransactionType::parse("EXPENSE").unwrap(), TransactionType::Expense);
        assert_eq!(TransactionType::parse("Income").unwrap(), TransactionType::Income);
        assert_eq!(TransactionType::parse("  Exp ").unwrap(), TransactionType::Expense);
    }

    #[test]
    fn test_parse_rejects_unknown_words() {
        assert!(TransactionType::parse("spending").unwrap_err().is_validation());
        assert!(TransactionType::parse("").unwrap_err().is_validation());
        assert!(TransactionType::parse("expenses").unwrap_err().is_validation());
    }

    #[test]
    fn test_display_round_trip() {
        for t in [TransactionType::Expense, TransactionType::Income] {
            assert_eq!(TransactionType::parse(&t.to_string()).unwrap(), t);
        }
        assert_eq!(TransactionType::Expense.to_string(), "expense");
        assert_eq!(TransactionType::Income.to_string(), "income");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TransactionType::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
        let deserialized: TransactionType = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(deserialized, TransactionType::Income);
    }
}
