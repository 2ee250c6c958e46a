//! Configuration module for Ledger Coach
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CoachPaths;
pub use settings::Settings;
