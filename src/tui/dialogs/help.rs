//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Tab/S-Tab", "Cycle focus"),
        key_line("Ctrl+C", "Quit application"),
        Line::from(""),
        section("Date Fields"),
        Line::from(""),
        key_line("Enter", "Apply filters"),
        key_line("Esc", "Leave field"),
        key_line("Home/End", "Jump to start/end of field"),
        Line::from(""),
        section("Categories and Table"),
        Line::from(""),
        key_line("f/Enter", "Apply filters"),
        key_line("Space", "Toggle category"),
        key_line("a", "Select all / none"),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Jump to first/last"),
        key_line("PgUp/PgDn", "Move by a page"),
        key_line("o", "Open a CSV file"),
        key_line("x", "Dismiss notification"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit application"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
