use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_coach::activity::ActivityLogger;
use ledger_coach::cli::{handle_history_command, handle_ledger_command, LedgerCommands};
use ledger_coach::config::{paths::CoachPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "coach",
    author = "Kaylee Beyene",
    version,
    about = "Terminal finance coach for CSV ledgers",
    long_about = "Ledger Coach loads a CSV ledger of income and expenses, filters it \
                  by date range and category, and reports totals, a spending \
                  breakdown and tips from the command line or an interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Ledger CSV to open on startup
        file: Option<PathBuf>,
    },

    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show recent activity
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Write the default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CoachPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let logger = ActivityLogger::with_enabled(paths.activity_log(), settings.activity_log_enabled);

    match cli.command {
        Some(Commands::Tui { file }) => {
            ledger_coach::tui::run_tui(&settings, &paths, file)?;
        }
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(cmd, &settings, &logger)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&logger, count)?;
        }
        Some(Commands::Config) => {
            println!("Ledger Coach Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Activity log:   {}", paths.activity_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Activity log:    {}", on_off(settings.activity_log_enabled));
            match &settings.default_file {
                Some(file) => println!("  Default file:    {}", file.display()),
                None => println!("  Default file:    (none)"),
            }
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at {}",
                    paths.settings_file().display()
                );
                return Ok(());
            }
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        None => {
            println!("Ledger Coach - terminal finance coach for CSV ledgers");
            println!();
            println!("Run 'coach --help' for usage information.");
            println!("Run 'coach tui' to launch the interactive interface.");
            println!("Run 'coach summary <FILE>' for a quick summary.");
        }
    }

    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}
