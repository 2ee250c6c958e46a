//! Transaction row model
//!
//! Represents one ledger record as loaded from CSV. Fields that could not be
//! parsed from their source text are `None` (the missing-value marker).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The Type column of a ledger row
///
/// Only the exact labels `Income` and `Expense` are aggregated. Anything else
/// is kept verbatim as `Other` so it still shows up in the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
    Other(String),
}

impl TransactionKind {
    /// Classify a raw Type cell
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// The label as it appeared in the file
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// Transaction date, `None` if the cell was empty or unparseable
    pub date: Option<NaiveDate>,

    /// Income, Expense, or any other label
    pub kind: TransactionKind,

    /// Amount, `None` if the cell was empty or unparseable
    pub amount: Option<Money>,

    /// Category, `None` if the cell was empty
    pub category: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl TransactionRow {
    /// Create a row with all fields present
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date),
            kind,
            amount: Some(amount),
            category: Some(category.into()),
            description: description.into(),
        }
    }

    /// Amount with missing values counted as zero
    pub fn amount_or_zero(&self) -> Money {
        self.amount.unwrap_or_default()
    }

    /// Whether the given category is this row's category
    pub fn has_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Whether any field was coerced to the missing-value marker
    pub fn has_missing_values(&self) -> bool {
        self.date.is_none() || self.amount.is_none()
    }
}

/// The full ordered set of rows loaded from one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerTable {
    rows: Vec<TransactionRow>,
    categories: Vec<String>,
}

impl LedgerTable {
    /// Build a table, deriving the sorted distinct category list
    pub fn new(rows: Vec<TransactionRow>) -> Self {
        let mut categories: Vec<String> = rows
            .iter()
            .filter_map(|row| row.category.clone())
            .collect();
        categories.sort();
        categories.dedup();

        Self { rows, categories }
    }

    /// Rows in file order
    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    /// Sorted distinct non-missing categories
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows with a missing date or amount
    pub fn degraded_count(&self) -> usize {
        self.rows.iter().filter(|r| r.has_missing_values()).count()
    }
}
