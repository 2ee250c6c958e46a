//! Open file dialog
//!
//! Prompts for the path of a CSV ledger

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::services::REQUIRED_COLUMNS;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the open file dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(70, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Open CSV ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Path
            Constraint::Length(1),
            Constraint::Length(1), // Columns
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(
        app.path_input.clone().label("Path").focused(true),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(format!("Columns: {}", REQUIRED_COLUMNS.join(", ")))
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new("Enter: Load   Esc: Cancel").style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}
