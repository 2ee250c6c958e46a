//! Core data models for Ledger Coach
//!
//! This module contains the data structures that represent a loaded ledger:
//! monetary amounts, transaction rows and the ledger table.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{LedgerTable, TransactionKind, TransactionRow};
