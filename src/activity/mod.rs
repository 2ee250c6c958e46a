//! Activity log for Ledger Coach
//!
//! Records loads, filter applications and surfaced errors in an append-only
//! line-delimited JSON file.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_coach::activity::{ActivityEntry, ActivityLogger};
//!
//! let logger = ActivityLogger::new(paths.activity_log());
//! logger.log(&ActivityEntry::load("ledger.csv", table.len(), table.degraded_count()))?;
//! ```

mod entry;
mod logger;

pub use entry::{ActivityEntry, ActivityEvent};
pub use logger::ActivityLogger;
