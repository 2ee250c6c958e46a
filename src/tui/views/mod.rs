//! TUI Views module
//!
//! Header, filter panel, summary strip, transaction table, tips panel and
//! status bar.

pub mod filters;
pub mod header;
pub mod ledger_table;
pub mod status_bar;
pub mod summary;
pub mod tips;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{AppLayout, MainLayout};
use super::widgets::{
    error_dialog_area, notification_area, ErrorDialog, NotificationWidget,
};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let main = MainLayout::new(layout.main);

    header::render(frame, app, layout.header);
    filters::render(frame, app, layout.filters);
    summary::render(frame, app, main.summary);
    ledger_table::render(frame, app, main.table);
    tips::render(frame, app, main.tips);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::OpenFile => dialogs::open_file::render(frame, app),
        ActiveDialog::Error(info) => {
            frame.render_widget(
                ErrorDialog::new(info).with_technical(true),
                error_dialog_area(frame.area()),
            );
        }
        ActiveDialog::None => {}
    }
}
