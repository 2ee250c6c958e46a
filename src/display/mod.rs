//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{format_category_list, format_date, format_date_cell, format_ledger_rows, MISSING};
