//! Terminal User Interface module
//!
//! An interactive ledger screen built with ratatui: date and category
//! filters on the left, totals, the filtered table and tips on the right.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
