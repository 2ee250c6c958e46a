//! Reports module for Ledger Coach
//!
//! Summary figures, the per-category spending breakdown and the tip rules,
//! all computed from a slice of ledger rows.

pub mod breakdown;
pub mod summary;
pub mod tips;

pub use breakdown::{expense_by_category, CategorySpending, SpendingBreakdown};
pub use summary::{summarize, SummaryFigures};
pub use tips::{generate_tips, tips, Tip, ENCOURAGEMENT, LOW_SAVINGS, NO_DATA};
