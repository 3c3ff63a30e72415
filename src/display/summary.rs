//! Expense summary formatting

use crate::models::UniCash;

/// Render the two expense breakdowns as plain-text tables.
///
/// Callers check [`UniCash::has_expenses`] first; an expense-free record
/// has nothing to render.
pub fn format_summary(unicash: &UniCash) -> String {
    let mut output = String::from("Summary of your expenses\n");

    output.push_str("\nBy category\n");
    output.push_str(&format!("{:16} {:>10}\n", "Category", "Amount"));
    output.push_str(&"-".repeat(27));
    output.push('\n');
    for (category, total) in unicash.expenses_by_category() {
        output.push_str(&format!("{:16} {:>10}\n", category, total.to_string()));
    }

    output.push_str("\nBy month\n");
    output.push_str(&format!("{:16} {:>10}\n", "Month", "Amount"));
    output.push_str(&"-".repeat(27));
    output.push('\n');
    for (month, total) in unicash.expenses_by_month() {
        output.push_str(&format!("{:16} {:>10}\n", month.to_string(), total.to_string()));
    }

    output
}
