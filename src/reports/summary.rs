//! Summary figures
//!
//! Income, expense and balance totals over a set of ledger rows.

use serde::Serialize;

use crate::models::{Money, TransactionKind, TransactionRow};

/// Totals for the rows currently in view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryFigures {
    /// Sum of all `Income` amounts
    pub total_income: Money,
    /// Sum of all `Expense` amounts
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub net_balance: Money,
    /// Number of rows summarized, of any type
    pub row_count: usize,
}

impl SummaryFigures {
    /// Format the figures for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>23}\n",
            "Total Income:",
            self.total_income.format_grouped(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>23}\n",
            "Total Expense:",
            self.total_expense.format_grouped(currency_symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>23}\n",
            "Net Balance:",
            self.net_balance.format_grouped(currency_symbol)
        ));
        output.push_str(&format!("{:<16} {:>23}\n", "Transactions:", self.row_count));

        output
    }
}

/// Compute the summary figures for a set of rows
///
/// Missing amounts count as zero; rows that are neither `Income` nor
/// `Expense` contribute to neither total.
pub fn summarize(rows: &[TransactionRow]) -> SummaryFigures {
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for row in rows {
        match row.kind {
            TransactionKind::Income => total_income += row.amount_or_zero(),
            TransactionKind::Expense => total_expense += row.amount_or_zero(),
            TransactionKind::Other(_) => {}
        }
    }

    SummaryFigures {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
        row_count: rows.len(),
    }
}
