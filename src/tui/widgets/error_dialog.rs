//! Error dialog widget
//!
//! Displays detailed error information with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::LedgerError;
use crate::services::REQUIRED_COLUMNS;
use crate::tui::layout::centered_rect_fixed;

/// An error dialog with details and suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
    /// Technical details (for advanced users)
    pub technical: Option<String>,
}

impl ErrorInfo {
    /// Create error info from a LedgerError
    pub fn from_error(error: &LedgerError) -> Self {
        let (title, suggestions, technical) = match error {
            LedgerError::Load { path, .. } => (
                "Could Not Load CSV",
                vec![
                    "Check that the path is correct and the file is readable".to_string(),
                    "Make sure the file is UTF-8 encoded CSV".to_string(),
                ],
                Some(format!("Path: {}", path)),
            ),
            LedgerError::MissingColumns { .. } => (
                "Missing Columns",
                vec![format!(
                    "The header row must name the columns {}",
                    REQUIRED_COLUMNS.join(", ")
                )],
                None,
            ),
            LedgerError::Validation(_) => (
                "Invalid Filter",
                vec![
                    "Enter dates as YYYY-MM-DD".to_string(),
                    "Leave a date empty for no bound".to_string(),
                ],
                None,
            ),
            LedgerError::NoLedger => (
                "No Ledger Loaded",
                vec!["Press 'o' to open a CSV file".to_string()],
                None,
            ),
            LedgerError::Config(_) => (
                "Configuration Error",
                vec![
                    "Check your settings file for syntax errors".to_string(),
                    "Run 'coach init' to write a fresh settings file".to_string(),
                ],
                None,
            ),
            LedgerError::Io(msg) => (
                "I/O Error",
                vec!["Check that the file and data directory are accessible".to_string()],
                Some(msg.clone()),
            ),
            LedgerError::Json(msg) => (
                "Data File Error",
                vec!["The activity log or settings file may be corrupted".to_string()],
                Some(msg.clone()),
            ),
            LedgerError::Tui(_) => (
                "Interface Error",
                vec![
                    "Try resizing your terminal window".to_string(),
                    "Use the CLI commands instead".to_string(),
                ],
                None,
            ),
        };

        Self {
            title: title.to_string(),
            details: error.to_string(),
            suggestions,
            technical,
        }
    }

    /// Create a simple error info
    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
            technical: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
    show_technical: bool,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self {
            error,
            show_technical: false,
        }
    }

    /// Show technical details
    pub fn with_technical(mut self, show: bool) -> Self {
        self.show_technical = show;
        self
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let mut lines: Vec<Line> = Vec::new();
        for suggestion in &self.error.suggestions {
            lines.push(Line::from(vec![
                Span::styled("  - ", Style::default().fg(Color::Yellow)),
                Span::raw(suggestion.as_str()),
            ]));
        }
        if self.show_technical {
            if let Some(technical) = &self.error.technical {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    technical.as_str(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        if !lines.is_empty() {
            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(10, 16).min(parent.height);
    centered_rect_fixed(width, height, parent)
}
