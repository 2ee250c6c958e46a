//! Session state
//!
//! A [`Session`] owns the currently loaded ledger, the filtered view derived
//! from it and the filter that produced that view. Presentation layers hold
//! one session and call into it; nothing here is global.

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerTable, TransactionRow};
use crate::reports::{self, SpendingBreakdown, SummaryFigures, Tip};
use crate::services::filter::{self, LedgerFilter};
use crate::services::loader;

/// The ledger currently being analyzed
#[derive(Debug, Default)]
pub struct Session {
    source: Option<PathBuf>,
    table: Option<LedgerTable>,
    filtered: Vec<TransactionRow>,
    active_filter: Option<LedgerFilter>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger file, replacing the current one
    ///
    /// On failure the session is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LedgerResult<&LedgerTable> {
        let path = path.as_ref();
        let table = loader::load(path)?;
        Ok(self.replace_table(Some(path.to_path_buf()), table))
    }

    /// Install an already-parsed table
    ///
    /// The filtered view starts out as the whole table and no filter is active.
    pub fn replace_table(&mut self, source: Option<PathBuf>, table: LedgerTable) -> &LedgerTable {
        self.filtered = table.rows().to_vec();
        self.active_filter = None;
        self.source = source;
        self.table.insert(table)
    }

    /// Parse raw filter input and recompute the filtered view
    ///
    /// A validation failure leaves the previous view in place.
    pub fn apply_filters<I, S>(
        &mut self,
        start: &str,
        end: &str,
        categories: I,
    ) -> LedgerResult<&[TransactionRow]>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.table.is_none() {
            return Err(LedgerError::NoLedger);
        }
        let parsed = LedgerFilter::parse(start, end, categories)?;
        self.apply(parsed)
    }

    /// Recompute the filtered view from the full table
    pub fn apply(&mut self, ledger_filter: LedgerFilter) -> LedgerResult<&[TransactionRow]> {
        let table = self.table.as_ref().ok_or(LedgerError::NoLedger)?;
        self.filtered = filter::filter(table.rows(), &ledger_filter);
        self.active_filter = Some(ledger_filter);
        Ok(&self.filtered)
    }

    /// Drop the active filter and show the whole table again
    pub fn clear_filters(&mut self) {
        self.filtered = self
            .table
            .as_ref()
            .map(|t| t.rows().to_vec())
            .unwrap_or_default();
        self.active_filter = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<&LedgerTable> {
        self.table.as_ref()
    }

    /// Path of the loaded file, if it came from disk
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// File name of the loaded ledger for display
    pub fn source_name(&self) -> Option<String> {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Sorted distinct categories of the loaded table
    pub fn categories(&self) -> &[String] {
        self.table.as_ref().map(|t| t.categories()).unwrap_or(&[])
    }

    /// The rows currently in view
    pub fn filtered(&self) -> &[TransactionRow] {
        &self.filtered
    }

    /// The filter that produced the current view (`None` right after a load)
    pub fn active_filter(&self) -> Option<&LedgerFilter> {
        self.active_filter.as_ref()
    }

    pub fn summary(&self) -> SummaryFigures {
        reports::summarize(&self.filtered)
    }

    pub fn tips(&self) -> Vec<Tip> {
        reports::generate_tips(&self.filtered, &self.summary())
    }

    pub fn breakdown(&self) -> SpendingBreakdown {
        SpendingBreakdown::generate(&self.filtered)
    }
}
