//! Application state for the TUI
//!
//! The App struct holds the session and all UI state needed for rendering
//! and handling events.

use std::path::PathBuf;

use crate::activity::{ActivityEntry, ActivityLogger};
use crate::config::paths::CoachPaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;
use crate::services::Session;

use super::widgets::{ErrorInfo, Notification, NotificationQueue, TextInput};

/// Shown in the tips panel before any file is loaded
pub const TIPS_PLACEHOLDER: &str = "Load a CSV and apply filters to see tips.";

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    StartDate,
    EndDate,
    Categories,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::Categories,
            Self::Categories => Self::Table,
            Self::Table => Self::StartDate,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::StartDate => Self::Table,
            Self::EndDate => Self::StartDate,
            Self::Categories => Self::EndDate,
            Self::Table => Self::Categories,
        }
    }

    /// Whether typed characters go into a text field
    pub fn is_text_input(self) -> bool {
        matches!(self, Self::StartDate | Self::EndDate)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StartDate => "Start date",
            Self::EndDate => "End date",
            Self::Categories => "Categories",
            Self::Table => "Transactions",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    OpenFile,
    Error(ErrorInfo),
}

/// One entry of the category multi-select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,

    pub paths: &'a CoachPaths,

    pub logger: ActivityLogger,

    /// Loaded ledger, filtered view and active filter
    pub session: Session,

    pub should_quit: bool,

    pub focus: Focus,

    pub active_dialog: ActiveDialog,

    pub start_input: TextInput,

    pub end_input: TextInput,

    /// Path typed into the open-file dialog
    pub path_input: TextInput,

    /// Categories of the loaded ledger with their selection state
    pub categories: Vec<CategoryOption>,

    pub selected_category_index: usize,

    /// Highlighted row in the transaction table
    pub selected_row_index: usize,

    pub notifications: NotificationQueue,

    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(settings: &'a Settings, paths: &'a CoachPaths) -> Self {
        Self {
            settings,
            paths,
            logger: ActivityLogger::with_enabled(
                paths.activity_log(),
                settings.activity_log_enabled,
            ),
            session: Session::new(),
            should_quit: false,
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            start_input: TextInput::new().placeholder("YYYY-MM-DD"),
            end_input: TextInput::new().placeholder("YYYY-MM-DD"),
            path_input: TextInput::new().placeholder("path/to/ledger.csv"),
            categories: Vec::new(),
            selected_category_index: 0,
            selected_row_index: 0,
            notifications: NotificationQueue::new(),
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::OpenFile {
            let current = self
                .session
                .source()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            self.path_input.set_value(current);
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Surface an error in a dialog and record it in the activity log
    pub fn show_error(&mut self, error: &LedgerError) {
        let source = self.session.source_name();
        self.record(ActivityEntry::error(source, error.to_string()));
        self.active_dialog = ActiveDialog::Error(ErrorInfo::from_error(error));
    }

    /// Load a ledger file, replacing the current one
    ///
    /// All categories start out selected and the view shows every row.
    pub fn load_file(&mut self, path: PathBuf) {
        let loaded = self.session.load(&path).map(|table| {
            (
                table.len(),
                table.degraded_count(),
                table.categories().to_vec(),
            )
        });

        match loaded {
            Ok((rows, degraded, categories)) => {
                self.categories = categories
                    .into_iter()
                    .map(|name| CategoryOption {
                        name,
                        selected: true,
                    })
                    .collect();
                self.selected_category_index = 0;
                self.selected_row_index = 0;

                self.record(ActivityEntry::load(
                    path.display().to_string(),
                    rows,
                    degraded,
                ));

                let name = self.session.source_name().unwrap_or_default();
                self.notifications
                    .push(Notification::success(format!("Loaded {} ({} rows)", name, rows)));
                if degraded > 0 {
                    self.notifications.push(Notification::warning(format!(
                        "{} row(s) had an unreadable date or amount",
                        degraded
                    )));
                }
                self.set_status(format!("{} rows", rows));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Names of the checked categories
    pub fn selected_categories(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Apply the date inputs and category selection to the loaded ledger
    pub fn apply_filters(&mut self) {
        let selected = self.selected_categories();
        let result = self
            .session
            .apply_filters(self.start_input.value(), self.end_input.value(), selected)
            .map(|rows| rows.len());

        match result {
            Ok(count) => {
                self.selected_row_index = 0;
                let detail = self
                    .session
                    .active_filter()
                    .map(|f| format!("{}; {}", f.range, f.categories))
                    .unwrap_or_default();
                let source = self.session.source_name();
                self.record(ActivityEntry::filter(source, detail, count));
                self.set_status(format!("{} rows match", count));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Toggle the highlighted category
    pub fn toggle_category(&mut self) {
        if let Some(option) = self.categories.get_mut(self.selected_category_index) {
            option.selected = !option.selected;
        }
    }

    /// Select every category, or clear them all if all are already selected
    pub fn toggle_all_categories(&mut self) {
        let select = !self.categories.iter().all(|c| c.selected);
        for option in &mut self.categories {
            option.selected = select;
        }
    }

    /// The text field that has focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::StartDate => Some(&mut self.start_input),
            Focus::EndDate => Some(&mut self.end_input),
            _ => None,
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
    }

    /// Move the highlight up in the focused list
    pub fn move_up(&mut self, step: usize) {
        match self.focus {
            Focus::Categories => {
                self.selected_category_index = self.selected_category_index.saturating_sub(step);
            }
            Focus::Table => {
                self.selected_row_index = self.selected_row_index.saturating_sub(step);
            }
            _ => {}
        }
    }

    /// Move the highlight down in the focused list
    pub fn move_down(&mut self, step: usize) {
        match self.focus {
            Focus::Categories => {
                let max = self.categories.len().saturating_sub(1);
                self.selected_category_index = self.selected_category_index.saturating_add(step).min(max);
            }
            Focus::Table => {
                let max = self.session.filtered().len().saturating_sub(1);
                self.selected_row_index = self.selected_row_index.saturating_add(step).min(max);
            }
            _ => {}
        }
    }

    pub fn move_to_top(&mut self) {
        self.move_up(usize::MAX);
    }

    pub fn move_to_bottom(&mut self) {
        self.move_down(usize::MAX);
    }

    /// Tip lines for the tips panel
    pub fn tip_lines(&self) -> Vec<String> {
        if !self.session.is_loaded() {
            return vec![TIPS_PLACEHOLDER.to_string()];
        }
        self.session.tips().iter().map(ToString::to_string).collect()
    }

    /// Periodic housekeeping between events
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Write to the activity log, turning failures into a warning
    fn record(&mut self, entry: ActivityEntry) {
        if let Err(e) = self.logger.log(&entry) {
            self.notifications.push(Notification::warning(format!(
                "Could not write activity log: {}",
                e
            )));
        }
    }
}
