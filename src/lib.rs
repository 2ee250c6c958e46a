//! Ledger Coach - terminal finance coach for CSV ledgers
//!
//! This library loads a CSV ledger of income and expense rows, narrows it to
//! a date range and a set of categories, totals what remains and derives a
//! few plain-language spending tips from the totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money and ledger row types
//! - `services`: CSV loading, filtering and the session that ties them together
//! - `reports`: Summary figures, category breakdown and tips
//! - `activity`: Append-only activity log
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive interface
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_coach::services::Session;
//!
//! let mut session = Session::new();
//! session.load("ledger.csv")?;
//! session.apply_filters("2024-01-01", "2024-01-31", ["Food", "Rent"])?;
//! for tip in session.tips() {
//!     println!("{}", tip);
//! }
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
