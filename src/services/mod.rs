//! Service layer for Ledger Coach
//!
//! Loading ledger files, filtering rows, and the session that ties the two
//! together for the presentation layers.

pub mod filter;
pub mod loader;
pub mod session;

pub use filter::{filter, CategorySelection, DateRange, LedgerFilter};
pub use loader::{load, load_from_reader, parse_date, ColumnMapping, REQUIRED_COLUMNS};
pub use session::Session;
