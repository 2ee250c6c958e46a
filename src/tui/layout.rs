//! Layout definitions for the TUI
//!
//! Header on top, filter panel on the left, summary, table and tips on the
//! right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// File name and key hints
    pub header: Rect,
    /// Date inputs and category list
    pub filters: Rect,
    /// Summary, table and tips
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(40)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            filters: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the filter panel
pub struct FilterLayout {
    pub start: Rect,
    pub end: Rect,
    pub categories: Rect,
}

impl FilterLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        Self {
            start: chunks[0],
            end: chunks[1],
            categories: chunks[2],
        }
    }
}

/// Layout for the main panel
pub struct MainLayout {
    pub summary: Rect,
    pub table: Rect,
    pub tips: Rect,
}

impl MainLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Summary
                Constraint::Min(5),    // Table
                Constraint::Length(6), // Tips
            ])
            .split(area);

        Self {
            summary: chunks[0],
            table: chunks[1],
            tips: chunks[2],
        }
    }
}

/// Create a centered rect sized as a percentage of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect, shrunk to fit `r`
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}
