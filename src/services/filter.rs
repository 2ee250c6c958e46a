//! Filter engine
//!
//! Selects the rows of a ledger that fall inside a date range and belong to
//! a selected set of categories.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionRow;
use crate::services::loader::parse_date;

/// An inclusive date range; absent bounds are open-ended
///
/// A range whose start lies after its end cannot be constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> LedgerResult<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(LedgerError::Validation(format!(
                    "Start date {} is after end date {}",
                    s, e
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// A range with no bounds
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Parse raw user input; blank strings mean "no bound"
    pub fn parse(start: &str, end: &str) -> LedgerResult<Self> {
        Self::new(parse_bound(start)?, parse_bound(end)?)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether a date lies within the range (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<NaiveDate>, open: &'static str| {
            d.map(|d| d.to_string()).unwrap_or_else(|| open.to_string())
        };
        write!(f, "{} to {}", bound(self.start, "earliest"), bound(self.end, "latest"))
    }
}

fn parse_bound(raw: &str) -> LedgerResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_date(raw)
        .map(Some)
        .ok_or_else(|| LedgerError::invalid_date(raw))
}

/// Which categories a filter lets through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// Every category present in the table (rows without one never match)
    #[default]
    All,
    /// Only the named categories
    Only(BTreeSet<String>),
}

impl CategorySelection {
    /// Build a selection from the user's choice; nothing chosen means all
    pub fn from_selected<I, S>(selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = selected.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Self::All
        } else {
            Self::Only(set)
        }
    }

    /// Whether a row's category passes the selection
    pub fn matches(&self, category: Option<&str>) -> bool {
        match (self, category) {
            (_, None) => false,
            (Self::All, Some(_)) => true,
            (Self::Only(set), Some(c)) => set.contains(c),
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all categories"),
            Self::Only(set) => {
                let names: Vec<&str> = set.iter().map(String::as_str).collect();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

/// The active date and category constraints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerFilter {
    pub range: DateRange,
    pub categories: CategorySelection,
}

impl LedgerFilter {
    pub fn new(range: DateRange, categories: CategorySelection) -> Self {
        Self { range, categories }
    }

    /// Build a filter from raw adapter input
    pub fn parse<I, S>(start: &str, end: &str, categories: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            range: DateRange::parse(start, end)?,
            categories: CategorySelection::from_selected(categories),
        })
    }

    /// Check if a row matches this filter
    ///
    /// Rows with a missing date or category never match.
    pub fn matches(&self, row: &TransactionRow) -> bool {
        let in_range = row.date.map_or(false, |d| self.range.contains(d));
        in_range && self.categories.matches(row.category.as_deref())
    }
}

/// Apply a filter, preserving row order
pub fn filter(rows: &[TransactionRow], filter: &LedgerFilter) -> Vec<TransactionRow> {
    rows.iter().filter(|row| filter.matches(row)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(day: u32, kind: TransactionKind, cents: i64, category: &str) -> TransactionRow {
        TransactionRow::new(date(2024, 1, day), kind, Money::from_cents(cents), category, "")
    }

    fn sample_rows() -> Vec<TransactionRow> {
        let mut undated = row(1, TransactionKind::Expense, 900, "Food");
        undated.date = None;
        let mut uncategorized = row(7, TransactionKind::Expense, 300, "x");
        uncategorized.category = None;

        vec![
            row(1, TransactionKind::Income, 100_000, "Salary"),
            row(5, TransactionKind::Expense, 60_000, "Rent"),
            undated,
            row(10, TransactionKind::Expense, 10_000, "Food"),
            uncategorized,
            row(20, TransactionKind::Expense, 2_000, "Food"),
        ]
    }

    fn is_subsequence(sub: &[TransactionRow], full: &[TransactionRow]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|r| it.any(|f| f == r))
    }

    #[test]
    fn test_unbounded_all_excludes_missing_date_and_category() {
        let rows = sample_rows();
        let result = filter(&rows, &LedgerFilter::default());

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|r| r.date.is_some() && r.category.is_some()));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let rows = sample_rows();
        let range = DateRange::new(Some(date(2024, 1, 5)), Some(date(2024, 1, 10))).unwrap();
        let result = filter(&rows, &LedgerFilter::new(range, CategorySelection::All));

        let days: Vec<_> = result.iter().map(|r| r.date.unwrap()).collect();
        assert_eq!(days, vec![date(2024, 1, 5), date(2024, 1, 10)]);
    }

    #[test]
    fn test_open_ended_bounds() {
        let rows = sample_rows();
        let from_tenth = DateRange::new(Some(date(2024, 1, 10)), None).unwrap();
        assert_eq!(filter(&rows, &LedgerFilter::new(from_tenth, CategorySelection::All)).len(), 2);

        let until_fifth = DateRange::new(None, Some(date(2024, 1, 5))).unwrap();
        assert_eq!(filter(&rows, &LedgerFilter::new(until_fifth, CategorySelection::All)).len(), 2);
    }

    #[test]
    fn test_category_selection() {
        let rows = sample_rows();
        let food = LedgerFilter::new(
            DateRange::unbounded(),
            CategorySelection::from_selected(["Food"]),
        );
        let result = filter(&rows, &food);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.has_category("Food")));
    }

    #[test]
    fn test_empty_selection_means_all() {
        let none: Vec<String> = Vec::new();
        assert_eq!(CategorySelection::from_selected(none), CategorySelection::All);
        assert!(!CategorySelection::All.matches(None));
        assert!(CategorySelection::All.matches(Some("Anything")));
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let rows = sample_rows();
        let filters = [
            LedgerFilter::default(),
            LedgerFilter::parse("2024-01-02", "", ["Food", "Rent"]).unwrap(),
            LedgerFilter::parse("", "2024-01-09", Vec::<String>::new()).unwrap(),
        ];

        for f in &filters {
            let result = filter(&rows, f);
            assert!(is_subsequence(&result, &rows));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = sample_rows();
        let f = LedgerFilter::parse("2024-01-01", "2024-01-15", ["Food", "Salary"]).unwrap();

        let once = filter(&rows, &f);
        let twice = filter(&once, &f);
        assert_eq!(once, twice);
        assert_eq!(filter(&rows, &f), once);
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let err = DateRange::parse("2024-02-01", "2024-01-01").unwrap_err();
        assert!(err.is_validation());

        let err = DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1))).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let range = DateRange::parse("2024-01-05", "2024-01-05").unwrap();
        assert!(range.contains(date(2024, 1, 5)));
        assert!(!range.contains(date(2024, 1, 6)));
    }

    #[test]
    fn test_parse_blank_and_invalid_bounds() {
        let range = DateRange::parse("  ", "").unwrap();
        assert_eq!(range, DateRange::unbounded());

        let err = DateRange::parse("not a date", "").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_display() {
        let range = DateRange::parse("2024-01-01", "").unwrap();
        assert_eq!(range.to_string(), "2024-01-01 to latest");
        assert_eq!(
            CategorySelection::from_selected(["Rent", "Food"]).to_string(),
            "Food, Rent"
        );
    }
}
