//! Ledger loader
//!
//! Reads a CSV ledger into a [`LedgerTable`]. Required columns are located by
//! header name; dates and amounts that fail to parse become missing values so
//! one bad cell never aborts the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerTable, Money, TransactionKind, TransactionRow};

/// Columns every ledger file must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["Date", "Type", "Amount", "Category", "Description"];

/// Date-only formats, tried in order
///
/// Two-digit years come before four-digit ones because `%Y` also accepts
/// short years. Month-first wins over day-first for ambiguous slashes.
const DATE_FORMATS: [&str; 14] = [
    "%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%d/%m/%y", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y",
    "%d.%m.%y", "%d.%m.%Y", "%Y.%m.%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y",
];

/// Date-and-time formats whose date part is kept
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Column indices of the required fields in a particular file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date: usize,
    pub kind: usize,
    pub amount: usize,
    pub category: usize,
    pub description: usize,
}

impl ColumnMapping {
    /// Locate the required columns in a header record
    ///
    /// Names are compared trimmed and case-insensitively; the first match
    /// wins. Fails listing every required column that is absent.
    pub fn from_headers(headers: &StringRecord) -> LedgerResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let found: Vec<Option<usize>> = REQUIRED_COLUMNS.iter().map(|&name| find(name)).collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .zip(&found)
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        match found.as_slice() {
            [Some(date), Some(kind), Some(amount), Some(category), Some(description)] => Ok(Self {
                date: *date,
                kind: *kind,
                amount: *amount,
                category: *category,
                description: *description,
            }),
            _ => Err(LedgerError::MissingColumns { columns: missing }),
        }
    }
}

/// Load a ledger CSV file from disk
pub fn load(path: impl AsRef<Path>) -> LedgerResult<LedgerTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LedgerError::load(path, e.to_string()))?;
    load_from_reader(file).map_err(|e| match e {
        LedgerError::Io(reason) => LedgerError::load(path, reason),
        other => other,
    })
}

/// Load a ledger from any reader producing CSV text
pub fn load_from_reader<R: Read>(reader: R) -> LedgerResult<LedgerTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| LedgerError::Io(format!("Error reading CSV header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| LedgerError::Io(format!("Error reading CSV record: {}", e)))?;
        rows.push(parse_record(&record, &mapping));
    }

    Ok(LedgerTable::new(rows))
}

/// Convert one CSV record into a row, coercing bad cells to missing values
pub fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> TransactionRow {
    let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

    let category = cell(mapping.category);

    TransactionRow {
        date: parse_date(cell(mapping.date)),
        kind: TransactionKind::parse(cell(mapping.kind)),
        amount: parse_amount(cell(mapping.amount)),
        category: if category.is_empty() {
            None
        } else {
            Some(category.to_string())
        },
        description: cell(mapping.description).to_string(),
    }
}

/// Parse a date in any of the common representations
///
/// Returns `None` for empty or unrecognized input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Parse an amount cell; `None` for empty or unparseable input
pub fn parse_amount(s: &str) -> Option<Money> {
    Money::parse(s).ok()
}
