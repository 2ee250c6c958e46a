//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod history;
pub mod ledger;

pub use history::handle_history_command;
pub use ledger::{handle_ledger_command, record, FilterArgs, LedgerArgs, LedgerCommands};
