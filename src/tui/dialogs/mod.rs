//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the main screen

pub mod help;
pub mod open_file;
