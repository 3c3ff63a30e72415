//! Transaction register formatting
//!
//! Renders the displayed transaction list as a fixed-width table,
//! numbered from 1 so the numbers line up with edit/delete indexes.

use crate::models::Transaction;

/// Format one register row. `number` is the 1-based display index.
pub fn format_transaction_row(number: usize, transaction: &Transaction) -> String {
    format!(
        "{:>3}. {:24} {:8} {:>10} {:16} {:18} {}",
        number,
        truncate(transaction.name.as_str(), 24),
        transaction.transaction_type.to_string(),
        transaction.amount.to_string(),
        transaction.datetime.to_string(),
        truncate(transaction.location.as_str(), 18),
        transaction.categories
    )
}

/// Format the displayed list as a register table
pub fn format_register(transactions: &[&Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:4} {:24} {:8} {:>10} {:16} {:18} {}\n",
        "No.", "Name", "Type", "Amount", "Date", "Location", "Categories"
    ));
    output.push_str(&"-".repeat(96));
    output.push('\n');

    for (i, transaction) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, transaction));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Amount, Category, CategoryList, DateTime, Location, Name, TransactionType,
    };

    fn transaction(name: &str, location: &str) -> Transaction {
        Transaction::new(
            Name::new(name).unwrap(),
            TransactionType::Expense,
            Amount::from_cents(850),
            DateTime::parse("15-01-2024 12:30").unwrap(),
            Location::new(location).unwrap(),
            CategoryList::new(vec![Category::new("food").unwrap()]).unwrap(),
        )
    }

    #[test]
    fn test_row_contains_every_field() {
        let row = format_transaction_row(3, &transaction("Lunch", "Deck"));
        assert!(row.starts_with("  3. Lunch"));
        assert!(row.contains("expense"));
        assert!(row.contains("8.50"));
        assert!(row.contains("15-01-2024 12:30"));
        assert!(row.contains("Deck"));
        assert!(row.ends_with("food"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let row = format_transaction_row(
            1,
            &transaction("A very long transaction name that will not fit", "Deck"),
        );
        assert!(row.contains("A very long transacti..."));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_register(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_register_numbers_rows_from_one() {
        let first = transaction("Lunch", "Deck");
        let second = transaction("Dinner", "Home");
        let register = format_register(&[&first, &second]);

        let lines: Vec<&str> = register.lines().collect();
        assert!(lines[0].starts_with("No."));
        assert!(lines[2].starts_with("  1. Lunch"));
        assert!(lines[3].starts_with("  2. Dinner"));
    }
}
