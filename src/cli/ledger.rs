//! CLI commands for analyzing a ledger file
//!
//! Each command loads the file into a fresh [`Session`], optionally applies
//! the filter flags, and prints one view of the result.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::activity::{ActivityEntry, ActivityLogger};
use crate::config::Settings;
use crate::display::{format_category_list, format_ledger_rows};
use crate::error::LedgerResult;
use crate::services::Session;

/// Date and category filter flags shared by the report commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Only include this category (repeatable)
    #[arg(short, long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Run the filter even without bounds (drops rows with a missing date or category)
    #[arg(long)]
    pub apply_filters: bool,
}

impl FilterArgs {
    /// Whether any flag asks for the filter engine to run
    pub fn is_active(&self) -> bool {
        self.apply_filters
            || self.start.is_some()
            || self.end.is_some()
            || !self.categories.is_empty()
    }
}

/// A ledger file plus filter flags
#[derive(Args, Debug, Clone)]
pub struct LedgerArgs {
    /// Path to the ledger CSV file
    pub file: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Ledger analysis subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// List the rows in view
    #[command(alias = "ls")]
    List(LedgerArgs),

    /// Show total income, expense and net balance
    Summary(LedgerArgs),

    /// Show spending tips
    Tips(LedgerArgs),

    /// Show expenses by category
    Breakdown(LedgerArgs),

    /// List the distinct categories in a ledger file
    Categories {
        /// Path to the ledger CSV file
        file: PathBuf,
    },
}

/// Handle ledger analysis commands
pub fn handle_ledger_command(
    cmd: LedgerCommands,
    settings: &Settings,
    logger: &ActivityLogger,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LedgerCommands::List(args) => {
            let session = open_session(&args, logger)?;
            print!(
                "{}",
                format_ledger_rows(session.filtered(), symbol, &settings.date_format)
            );
        }
        LedgerCommands::Summary(args) => {
            let session = open_session(&args, logger)?;
            print!("{}", session.summary().format_terminal(symbol));
        }
        LedgerCommands::Tips(args) => {
            let session = open_session(&args, logger)?;
            for tip in session.tips() {
                println!("{}", tip);
            }
        }
        LedgerCommands::Breakdown(args) => {
            let session = open_session(&args, logger)?;
            print!("{}", session.breakdown().format_terminal(symbol));
        }
        LedgerCommands::Categories { file } => {
            let mut session = Session::new();
            load_logged(&mut session, &file, logger)?;
            print!("{}", format_category_list(session.categories()));
        }
    }

    Ok(())
}

/// Load the file and apply any requested filters
fn open_session(args: &LedgerArgs, logger: &ActivityLogger) -> LedgerResult<Session> {
    let mut session = Session::new();
    load_logged(&mut session, &args.file, logger)?;

    if args.filters.is_active() {
        let filters = &args.filters;
        let result = session
            .apply_filters(
                filters.start.as_deref().unwrap_or(""),
                filters.end.as_deref().unwrap_or(""),
                filters.categories.iter().cloned(),
            )
            .map(|rows| rows.len());

        let source = session.source_name();
        match result {
            Ok(count) => {
                let detail = session
                    .active_filter()
                    .map(|f| format!("{}; {}", f.range, f.categories))
                    .unwrap_or_default();
                record(logger, &ActivityEntry::filter(source, detail, count));
            }
            Err(e) => {
                record(logger, &ActivityEntry::error(source, e.to_string()));
                return Err(e);
            }
        }
    }

    Ok(session)
}

fn load_logged(session: &mut Session, file: &Path, logger: &ActivityLogger) -> LedgerResult<()> {
    let source = file.display().to_string();
    match session.load(file) {
        Ok(table) => {
            let degraded = table.degraded_count();
            if degraded > 0 {
                eprintln!("Note: {} row(s) had an unreadable date or amount.", degraded);
            }
            record(logger, &ActivityEntry::load(source, table.len(), degraded));
            Ok(())
        }
        Err(e) => {
            record(logger, &ActivityEntry::error(Some(source), e.to_string()));
            Err(e)
        }
    }
}

/// Write an activity entry, reporting but not propagating failures
pub fn record(logger: &ActivityLogger, entry: &ActivityEntry) {
    if let Err(e) = logger.log(entry) {
        eprintln!("Warning: could not write activity log: {}", e);
    }
}
