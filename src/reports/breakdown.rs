//! Spending breakdown
//!
//! Groups expense rows by category. Rows without a category are left out of
//! the grouping entirely, including its total.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Money, TransactionRow};

/// Sum expense amounts per category, keyed and ordered by name
pub fn expense_by_category(rows: &[TransactionRow]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for (category, amount) in categorized_expenses(rows) {
        *totals.entry(category.to_string()).or_default() += amount;
    }
    totals
}

fn categorized_expenses(rows: &[TransactionRow]) -> impl Iterator<Item = (&str, Money)> {
    rows.iter()
        .filter(|row| row.kind.is_expense())
        .filter_map(|row| {
            row.category
                .as_deref()
                .map(|category| (category, row.amount_or_zero()))
        })
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the grouped expense total, 0-100
    pub percentage: f64,
}

/// Expense totals per category, largest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpendingBreakdown {
    pub categories: Vec<CategorySpending>,
    /// Sum over all grouped categories
    pub total: Money,
}

impl SpendingBreakdown {
    /// Build the breakdown for a set of rows
    pub fn generate(rows: &[TransactionRow]) -> Self {
        let mut grouped: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        for (category, amount) in categorized_expenses(rows) {
            let entry = grouped.entry(category).or_insert((Money::zero(), 0));
            entry.0 += amount;
            entry.1 += 1;
        }

        let total: Money = grouped.values().map(|(amount, _)| *amount).sum();

        let mut categories: Vec<CategorySpending> = grouped
            .into_iter()
            .map(|(category, (amount, count))| CategorySpending {
                category: category.to_string(),
                total: amount,
                transaction_count: count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                },
            })
            .collect();

        // Largest first; the map already ordered equal amounts by name
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self { categories, total }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The category with the largest total, ties going to the smallest name
    pub fn top(&self) -> Option<&CategorySpending> {
        self.categories.first()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No categorized expenses.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>18} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for entry in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>18} {:>6} {:>6.1}%\n",
                entry.category,
                entry.total.format_grouped(currency_symbol),
                entry.transaction_count,
                entry.percentage
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>18} {:>6}\n",
            "TOTAL",
            self.total.format_grouped(currency_symbol),
            self.categories.iter().map(|c| c.transaction_count).sum::<usize>()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn row(kind: TransactionKind, cents: i64, category: Option<&str>) -> TransactionRow {
        let mut row = TransactionRow::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            kind,
            Money::from_cents(cents),
            "",
            "",
        );
        row.category = category.map(String::from);
        row
    }

    #[test]
    fn test_expense_by_category_ignores_income_and_uncategorized() {
        let rows = vec![
            row(TransactionKind::Income, 100_000, Some("Salary")),
            row(TransactionKind::Expense, 60_000, Some("Rent")),
            row(TransactionKind::Expense, 10_000, Some("Food")),
            row(TransactionKind::Expense, 5_000, Some("Food")),
            row(TransactionKind::Expense, 7_000, None),
        ];
        let totals = expense_by_category(&rows);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Rent"], Money::from_cents(60_000));
        assert_eq!(totals["Food"], Money::from_cents(15_000));
        assert!(!totals.contains_key("Salary"));
    }

    #[test]
    fn test_generate_sorted_descending() {
        let rows = vec![
            row(TransactionKind::Expense, 1_000, Some("Food")),
            row(TransactionKind::Expense, 3_000, Some("Rent")),
            row(TransactionKind::Expense, 1_000, Some("Fuel")),
        ];
        let breakdown = SpendingBreakdown::generate(&rows);

        let names: Vec<_> = breakdown.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Fuel"]);
        assert_eq!(breakdown.total, Money::from_cents(5_000));
        assert!((breakdown.categories[0].percentage - 60.0).abs() < 1e-9);
        assert_eq!(breakdown.top().map(|c| c.category.as_str()), Some("Rent"));
    }

    #[test]
    fn test_transaction_counts() {
        let rows = vec![
            row(TransactionKind::Expense, 100, Some("Food")),
            row(TransactionKind::Expense, 200, Some("Food")),
            row(TransactionKind::Expense, 50, Some("Rent")),
        ];
        let breakdown = SpendingBreakdown::generate(&rows);

        assert_eq!(breakdown.categories[0].category, "Food");
        assert_eq!(breakdown.categories[0].transaction_count, 2);
        assert_eq!(breakdown.categories[1].transaction_count, 1);
    }

    #[test]
    fn test_zero_total_has_zero_percentages() {
        let rows = vec![row(TransactionKind::Expense, 0, Some("Food"))];
        let breakdown = SpendingBreakdown::generate(&rows);

        assert_eq!(breakdown.categories.len(), 1);
        assert_eq!(breakdown.categories[0].percentage, 0.0);
    }

    #[test]
    fn test_format_terminal() {
        let empty = SpendingBreakdown::generate(&[]);
        assert!(empty.is_empty());
        assert!(empty.format_terminal("$").contains("No categorized expenses."));

        let breakdown =
            SpendingBreakdown::generate(&[row(TransactionKind::Expense, 123_456, Some("Rent"))]);
        let output = breakdown.format_terminal("$");
        assert!(output.contains("Rent"));
        assert!(output.contains("$1,234.56"));
        assert!(output.contains("100.0%"));
    }
}
