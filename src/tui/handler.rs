//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the open
//! dialog and the focused panel.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;
use super::widgets::TextInput;

/// Rows moved by PageUp/PageDown in the table
const PAGE_SIZE: usize = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match key.code {
        KeyCode::Tab => {
            app.cycle_focus(true);
            return Ok(());
        }
        KeyCode::BackTab => {
            app.cycle_focus(false);
            return Ok(());
        }
        _ => {}
    }

    if app.focus.is_text_input() {
        handle_input_key(app, key)
    } else {
        handle_normal_key(app, key)
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::Error(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.close_dialog();
            }
        }
        ActiveDialog::OpenFile => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Enter => {
                let raw = app.path_input.value().trim().to_string();
                if raw.is_empty() {
                    return Ok(());
                }
                app.close_dialog();
                app.load_file(PathBuf::from(raw));
            }
            _ => edit_text(&mut app.path_input, key),
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys while a date field is focused
fn handle_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.apply_filters(),
        KeyCode::Esc => app.focus = Focus::Table,
        _ => {
            if let Some(input) = app.focused_input_mut() {
                edit_text(input, key);
            }
        }
    }
    Ok(())
}

/// Handle keys when the category list or table is focused
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('o') => app.open_dialog(ActiveDialog::OpenFile),
        KeyCode::Char('f') | KeyCode::Enter => app.apply_filters(),
        KeyCode::Char('x') => app.notifications.dismiss(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(1),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),
        KeyCode::PageDown => app.move_down(PAGE_SIZE),
        KeyCode::PageUp => app.move_up(PAGE_SIZE),

        KeyCode::Char(' ') if app.focus == Focus::Categories => app.toggle_category(),
        KeyCode::Char('a') if app.focus == Focus::Categories => app.toggle_all_categories(),

        _ => {}
    }
    Ok(())
}

/// Apply an editing key to a text field
fn edit_text(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CoachPaths;
    use crate::config::settings::Settings;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn setup() -> (TempDir, Settings, CoachPaths) {
        let dir = TempDir::new().unwrap();
        let paths = CoachPaths::with_base_dir(dir.path().join("data"));
        (dir, Settings::default(), paths)
    }

    #[test]
    fn test_typing_into_start_date_and_applying() {
        let (dir, settings, paths) = setup();
        let csv = dir.path().join("ledger.csv");
        std::fs::write(
            &csv,
            "Date,Type,Amount,Category,Description\n\
             2024-01-01,Income,100,Salary,\n\
             2024-02-01,Expense,50,Food,\n",
        )
        .unwrap();

        let mut app = App::new(&settings, &paths);
        app.load_file(csv);

        assert_eq!(app.focus, Focus::StartDate);
        type_text(&mut app, "2024-01-15");
        assert_eq!(app.start_input.value(), "2024-01-15");

        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert_eq!(app.session.filtered().len(), 1);
    }

    #[test]
    fn test_q_in_text_field_is_typed_not_quit() {
        let (_dir, settings, paths) = setup();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.start_input.value(), "q");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Table);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let (_dir, settings, paths) = setup();
        let mut app = App::new(&settings, &paths);
        app.open_dialog(ActiveDialog::Help);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_dialog_open_and_close() {
        let (_dir, settings, paths) = setup();
        let mut app = App::new(&settings, &paths);
        app.focus = Focus::Table;

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_open_file_dialog_loads_path() {
        let (dir, settings, paths) = setup();
        let csv = dir.path().join("ledger.csv");
        std::fs::write(&csv, "Date,Type,Amount,Category,Description\n").unwrap();

        let mut app = App::new(&settings, &paths);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.active_dialog, ActiveDialog::OpenFile);

        type_text(&mut app, &csv.display().to_string());
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert!(app.session.is_loaded());
    }

    #[test]
    fn test_apply_without_ledger_opens_error() {
        let (_dir, settings, paths) = setup();
        let mut app = App::new(&settings, &paths);
        app.focus = Focus::Categories;

        press(&mut app, KeyCode::Char('f'));
        assert!(matches!(app.active_dialog, ActiveDialog::Error(_)));
        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let (_dir, settings, paths) = setup();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::EndDate);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::StartDate);
    }
}
