//! Summary strip
//!
//! Total income, total expenses and net balance for the current view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let figures = app.session.summary();
    let symbol = app.settings.currency_symbol.as_str();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        ("Total Income", figures.total_income, Color::Green),
        ("Total Expenses", figures.total_expense, Color::Red),
        ("Net Balance", figures.net_balance, Color::Blue),
    ];

    for ((label, amount, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        render_card(frame, label, amount, color, symbol, *chunk);
    }
}

fn render_card(frame: &mut Frame, label: &str, amount: Money, color: Color, symbol: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(Style::default().fg(color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let line = Line::from(Span::styled(
        amount.format_grouped(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
