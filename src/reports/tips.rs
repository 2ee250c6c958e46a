//! Tip rule engine
//!
//! Derives a short list of advisory messages from the rows in view and
//! their summary figures. Every rule is evaluated independently, and the
//! encouragement message always comes last.

use std::fmt;

use serde::Serialize;

use super::breakdown::expense_by_category;
use super::summary::SummaryFigures;
use crate::models::{Money, TransactionRow};

/// Shown alone when there is nothing to analyze
pub const NO_DATA: &str = "No data to analyze.";

/// Shown when the net balance is under a fifth of income
pub const LOW_SAVINGS: &str = "💡 Your saving rate is below 20%. Try to save more each month.";

/// Always appended to a non-empty view
pub const ENCOURAGEMENT: &str = "✅ Great job tracking your transactions! Keep it up!";

/// One piece of advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tip {
    NoData,
    /// More than half of categorized spending went to one category
    DominantCategory { category: String, amount: Money, total: Money },
    LowSavingsRate,
    Encouragement,
}

impl Tip {
    pub fn message(&self) -> String {
        match self {
            Self::NoData => NO_DATA.to_string(),
            Self::DominantCategory { category, .. } => format!(
                "⚠️ Over 50% of your expenses went to {}. Consider cutting back.",
                category
            ),
            Self::LowSavingsRate => LOW_SAVINGS.to_string(),
            Self::Encouragement => ENCOURAGEMENT.to_string(),
        }
    }

    /// Whether this tip flags something to act on
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::DominantCategory { .. } | Self::LowSavingsRate)
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Evaluate every rule against the rows in view
pub fn generate_tips(rows: &[TransactionRow], summary: &SummaryFigures) -> Vec<Tip> {
    if rows.is_empty() {
        return vec![Tip::NoData];
    }

    let mut tips = Vec::new();

    if let Some(tip) = dominant_category(rows) {
        tips.push(tip);
    }

    if low_savings_rate(summary) {
        tips.push(Tip::LowSavingsRate);
    }

    tips.push(Tip::Encouragement);
    tips
}

/// Tip messages as display strings, in rule order
pub fn tips(rows: &[TransactionRow], summary: &SummaryFigures) -> Vec<String> {
    generate_tips(rows, summary)
        .iter()
        .map(Tip::message)
        .collect()
}

fn dominant_category(rows: &[TransactionRow]) -> Option<Tip> {
    let totals = expense_by_category(rows);
    let total: Money = totals.values().copied().sum();
    if total.is_zero() {
        return None;
    }

    // Strictly greater keeps the first (smallest) name on ties
    let mut top: Option<(&String, Money)> = None;
    for (category, &amount) in &totals {
        if top.map_or(true, |(_, best)| amount > best) {
            top = Some((category, amount));
        }
    }

    let (category, amount) = top?;
    if 2 * i128::from(amount.cents()) > i128::from(total.cents()) {
        Some(Tip::DominantCategory {
            category: category.clone(),
            amount,
            total,
        })
    } else {
        None
    }
}

fn low_savings_rate(summary: &SummaryFigures) -> bool {
    let income = i128::from(summary.total_income.cents());
    let net = i128::from(summary.net_balance.cents());
    income > 0 && 5 * net < income
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::reports::summarize;
    use chrono::NaiveDate;

    fn row(kind: TransactionKind, units: i64, category: &str) -> TransactionRow {
        TransactionRow::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            kind,
            Money::from_cents(units * 100),
            category,
            "",
        )
    }

    fn messages(rows: &[TransactionRow]) -> Vec<String> {
        tips(rows, &summarize(rows))
    }

    #[test]
    fn test_empty_view() {
        assert_eq!(messages(&[]), vec![NO_DATA.to_string()]);
    }

    #[test]
    fn test_dominant_rent_with_healthy_savings() {
        let rows = vec![
            row(TransactionKind::Income, 1000, "Salary"),
            row(TransactionKind::Expense, 600, "Rent"),
            row(TransactionKind::Expense, 100, "Food"),
        ];

        assert_eq!(
            messages(&rows),
            vec![
                "⚠️ Over 50% of your expenses went to Rent. Consider cutting back.".to_string(),
                ENCOURAGEMENT.to_string(),
            ]
        );
    }

    #[test]
    fn test_single_category_without_income() {
        let rows = vec![row(TransactionKind::Expense, 100, "Food")];
        let tips = generate_tips(&rows, &summarize(&rows));

        assert_eq!(tips.len(), 2);
        assert!(matches!(&tips[0], Tip::DominantCategory { category, .. } if category == "Food"));
        assert_eq!(tips[1], Tip::Encouragement);
    }

    #[test]
    fn test_all_three_rules_fire() {
        let rows = vec![
            row(TransactionKind::Income, 1000, "Salary"),
            row(TransactionKind::Expense, 900, "Rent"),
            row(TransactionKind::Expense, 50, "Food"),
        ];
        let tips = generate_tips(&rows, &summarize(&rows));

        assert_eq!(tips.len(), 3);
        assert!(tips[0].is_warning());
        assert_eq!(tips[1], Tip::LowSavingsRate);
        assert_eq!(tips[2], Tip::Encouragement);
    }

    #[test]
    fn test_exactly_half_does_not_fire() {
        let rows = vec![
            row(TransactionKind::Expense, 50, "Rent"),
            row(TransactionKind::Expense, 50, "Food"),
        ];
        let tips = generate_tips(&rows, &summarize(&rows));
        assert_eq!(tips, vec![Tip::Encouragement]);
    }

    #[test]
    fn test_savings_rate_boundary() {
        // 20% saved exactly is not below the threshold
        let at_threshold = vec![
            row(TransactionKind::Income, 1000, "Salary"),
            row(TransactionKind::Expense, 400, "Rent"),
            row(TransactionKind::Expense, 400, "Food"),
        ];
        assert!(!generate_tips(&at_threshold, &summarize(&at_threshold))
            .contains(&Tip::LowSavingsRate));

        let below = vec![
            row(TransactionKind::Income, 1000, "Salary"),
            row(TransactionKind::Expense, 401, "Rent"),
            row(TransactionKind::Expense, 400, "Food"),
        ];
        assert!(generate_tips(&below, &summarize(&below)).contains(&Tip::LowSavingsRate));
    }

    #[test]
    fn test_zero_expense_total_skips_dominant_rule() {
        let rows = vec![
            row(TransactionKind::Income, 100, "Salary"),
            row(TransactionKind::Expense, 0, "Food"),
        ];
        assert_eq!(messages(&rows), vec![ENCOURAGEMENT.to_string()]);
    }

    #[test]
    fn test_uncategorized_expenses_not_grouped() {
        let mut uncategorized = row(TransactionKind::Expense, 1000, "");
        uncategorized.category = None;
        let rows = vec![uncategorized, row(TransactionKind::Expense, 10, "Food")];

        let tips = generate_tips(&rows, &summarize(&rows));
        assert!(matches!(&tips[0], Tip::DominantCategory { category, total, .. }
            if category == "Food" && *total == Money::from_cents(1000)));
    }

    #[test]
    fn test_income_only_view() {
        let rows = vec![row(TransactionKind::Income, 500, "Salary")];
        assert_eq!(messages(&rows), vec![ENCOURAGEMENT.to_string()]);
    }

    #[test]
    fn test_negative_balance_is_low_savings() {
        let rows = vec![
            row(TransactionKind::Income, 100, "Salary"),
            row(TransactionKind::Expense, 30, "Rent"),
            row(TransactionKind::Expense, 30, "Food"),
            row(TransactionKind::Expense, 30, "Fuel"),
            row(TransactionKind::Expense, 30, "Fun"),
        ];
        let tips = generate_tips(&rows, &summarize(&rows));
        assert_eq!(tips, vec![Tip::LowSavingsRate, Tip::Encouragement]);
    }

    #[test]
    fn test_dominant_tie_goes_to_smallest_name() {
        let rows = vec![
            row(TransactionKind::Expense, 100, "Zeta"),
            row(TransactionKind::Expense, 100, "Alpha"),
            row(TransactionKind::Expense, -150, "Refunds"),
        ];
        let tips = generate_tips(&rows, &summarize(&rows));

        assert_eq!(
            tips[0],
            Tip::DominantCategory {
                category: "Alpha".to_string(),
                amount: Money::from_cents(10_000),
                total: Money::from_cents(5_000),
            }
        );
        assert_eq!(tips.last(), Some(&Tip::Encouragement));
    }
}
