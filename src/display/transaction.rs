//! Ledger row display formatting
//!
//! Renders ledger rows as a text table for the `list` command.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::TransactionRow;

/// Placeholder for a cell whose value could not be parsed
pub const MISSING: &str = "—";

#[derive(Tabled)]
struct RowDisplay {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl RowDisplay {
    fn new(row: &TransactionRow, currency_symbol: &str, date_format: &str) -> Self {
        Self {
            date: format_date_cell(row, date_format),
            kind: row.kind.to_string(),
            amount: row
                .amount
                .map(|a| a.format_grouped(currency_symbol))
                .unwrap_or_else(|| MISSING.to_string()),
            category: row.category.clone().unwrap_or_else(|| MISSING.to_string()),
            description: row.description.clone(),
        }
    }
}

/// Format a row's date, or the missing marker
pub fn format_date_cell(row: &TransactionRow, date_format: &str) -> String {
    row.date
        .map(|d| format_date(d, date_format))
        .unwrap_or_else(|| MISSING.to_string())
}

/// Format a date with a user-supplied strftime string
///
/// An invalid format string falls back to ISO 8601.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return date.to_string();
    }
    date.format(date_format).to_string()
}

/// Format ledger rows as a table
pub fn format_ledger_rows(
    rows: &[TransactionRow],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let display: Vec<RowDisplay> = rows
        .iter()
        .map(|row| RowDisplay::new(row, currency_symbol, date_format))
        .collect();

    let mut table = Table::new(display);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());

    let mut output = table.to_string();
    output.push_str(&format!("\n{} row(s)\n", rows.len()));
    output
}

/// Format a category list, one per line
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    fn sample_row() -> TransactionRow {
        TransactionRow::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            TransactionKind::Expense,
            Money::from_cents(123_456),
            "Rent",
            "March rent",
        )
    }

    #[test]
    fn test_format_ledger_rows() {
        let output = format_ledger_rows(&[sample_row()], "₦", "%Y-%m-%d");

        assert!(output.contains("Date"));
        assert!(output.contains("Description"));
        assert!(output.contains("2024-03-15"));
        assert!(output.contains("₦1,234.56"));
        assert!(output.contains("March rent"));
        assert!(output.contains("1 row(s)"));
    }

    #[test]
    fn test_missing_values_use_marker() {
        let mut row = sample_row();
        row.date = None;
        row.amount = None;
        row.category = None;

        let output = format_ledger_rows(&[row], "$", "%Y-%m-%d");
        assert_eq!(output.matches(MISSING).count(), 3);
    }

    #[test]
    fn test_custom_date_format() {
        assert_eq!(format_date_cell(&sample_row(), "%d/%m/%Y"), "15/03/2024");
        assert_eq!(format_date_cell(&sample_row(), "%Q bad"), "2024-03-15");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(format_ledger_rows(&[], "$", "%Y-%m-%d"), "No transactions found.\n");
        assert_eq!(format_category_list(&[]), "No categories found.\n");
        assert_eq!(
            format_category_list(&["Food".into(), "Rent".into()]),
            "Food\nRent\n"
        );
    }
}
