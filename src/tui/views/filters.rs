//! Filter panel
//!
//! Start/end date fields and the category multi-select

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::layout::FilterLayout;
use crate::tui::widgets::TextInput;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FilterLayout::new(area);

    render_input(frame, app, &app.start_input, Focus::StartDate, layout.start);
    render_input(frame, app, &app.end_input, Focus::EndDate, layout.end);
    render_categories(frame, app, layout.categories);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_input(frame: &mut Frame, app: &App, input: &TextInput, target: Focus, area: Rect) {
    let focused = app.focus == target && !app.has_dialog();
    let block = Block::default()
        .title(format!(" {} ", target.label()))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(input.clone().focused(focused), inner);
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Categories;
    let selected = app.categories.iter().filter(|c| c.selected).count();
    let block = Block::default()
        .title(format!(
            " Categories ({}/{}) ",
            selected,
            app.categories.len()
        ))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    if app.categories.is_empty() {
        let text = Paragraph::new("No categories")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|option| {
            let (mark, style) = if option.selected {
                ("[x] ", Style::default().fg(Color::Green))
            } else {
                ("[ ] ", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(option.name.as_str(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items).block(block).highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(app.selected_category_index));
    frame.render_stateful_widget(list, area, &mut state);
}
