//! Custom error types for Ledger Coach
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for Ledger Coach operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger file could not be opened or read
    #[error("Could not load CSV '{path}': {reason}")]
    Load { path: String, reason: String },

    /// The ledger file lacks one or more required columns
    #[error("Missing required column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Malformed filter input from the user
    #[error("Validation error: {0}")]
    Validation(String),

    /// A filter was requested before any ledger was loaded
    #[error("Load a CSV first.")]
    NoLedger,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl LedgerError {
    /// Create a load error for the given path
    pub fn load(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Load {
            path: path.as_ref().display().to_string(),
            reason: reason.into(),
        }
    }

    /// Create the validation error used for unparseable dates in a range
    pub fn invalid_date(raw: &str) -> Self {
        Self::Validation(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD.",
            raw
        ))
    }

    /// Check if this error aborted a load attempt
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::MissingColumns { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Ledger Coach operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_columns_lists_every_column() {
        let err = LedgerError::MissingColumns {
            columns: vec!["Amount".into(), "Category".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required column(s): Amount, Category"
        );
        assert!(err.is_load_error());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_load_error() {
        let err = LedgerError::load("ledger.csv", "file not found");
        assert_eq!(err.to_string(), "Could not load CSV 'ledger.csv': file not found");
        assert!(err.is_load_error());
    }

    #[test]
    fn test_invalid_date_is_validation() {
        let err = LedgerError::invalid_date("tomorrow");
        assert!(err.is_validation());
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
