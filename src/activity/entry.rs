//! Activity entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityEvent {
    /// A ledger file was loaded
    Load,
    /// Filters were applied to the loaded ledger
    Filter,
    /// An error was surfaced to the user
    Error,
}

impl std::fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityEvent::Load => write!(f, "LOAD"),
            ActivityEvent::Filter => write!(f, "FILTER"),
            ActivityEvent::Error => write!(f, "ERROR"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: ActivityEvent,

    /// Ledger file the event concerns, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Free-form detail, e.g. the filter applied or the error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Row count after the event (rows loaded or rows in view)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
}

impl ActivityEntry {
    fn new(event: ActivityEvent, source: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            source,
            detail: None,
            rows: None,
        }
    }

    /// Entry for a successful load
    pub fn load(source: impl Into<String>, rows: usize, degraded: usize) -> Self {
        let mut entry = Self::new(ActivityEvent::Load, Some(source.into()));
        entry.rows = Some(rows);
        if degraded > 0 {
            entry.detail = Some(format!("{} row(s) with missing values", degraded));
        }
        entry
    }

    /// Entry for an applied filter
    pub fn filter(source: Option<String>, description: impl Into<String>, rows: usize) -> Self {
        let mut entry = Self::new(ActivityEvent::Filter, source);
        entry.detail = Some(description.into());
        entry.rows = Some(rows);
        entry
    }

    /// Entry for an error shown to the user
    pub fn error(source: Option<String>, message: impl Into<String>) -> Self {
        let mut entry = Self::new(ActivityEvent::Error, source);
        entry.detail = Some(message.into());
        entry
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event
        );

        if let Some(source) = &self.source {
            output.push_str(&format!(" {}", source));
        }
        if let Some(rows) = self.rows {
            output.push_str(&format!(" ({} rows)", rows));
        }
        if let Some(detail) = &self.detail {
            output.push_str(&format!("\n  {}", detail));
        }

        output
    }
}
