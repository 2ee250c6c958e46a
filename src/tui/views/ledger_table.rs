//! Transaction table view
//!
//! Shows the rows that survived the active filter

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_date_cell, MISSING};
use crate::models::TransactionKind;
use crate::tui::app::{App, Focus};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let rows_in_view = app.session.filtered();
    let total = app.session.table().map(|t| t.len()).unwrap_or(0);

    let block = Block::default()
        .title(format!(" Transactions ({}/{}) ", rows_in_view.len(), total))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows_in_view.is_empty() {
        let message = if app.session.is_loaded() {
            "No transactions match the current filters."
        } else {
            "No file loaded. Press 'o' to open a CSV."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(9),  // Type
        Constraint::Length(16), // Amount
        Constraint::Length(16), // Category
        Constraint::Min(10),    // Description
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Description").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let date_format = app.settings.date_format.as_str();

    let rows: Vec<Row> = rows_in_view
        .iter()
        .map(|row| {
            let kind_color = match row.kind {
                TransactionKind::Income => Color::Green,
                TransactionKind::Expense => Color::Red,
                TransactionKind::Other(_) => Color::Gray,
            };
            let amount = row
                .amount
                .map(|a| a.format_grouped(symbol))
                .unwrap_or_else(|| MISSING.to_string());

            Row::new(vec![
                Cell::from(format_date_cell(row, date_format)),
                Cell::from(row.kind.to_string()).style(Style::default().fg(kind_color)),
                Cell::from(amount),
                Cell::from(row.category.clone().unwrap_or_else(|| MISSING.to_string())),
                Cell::from(row.description.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_row_index));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
