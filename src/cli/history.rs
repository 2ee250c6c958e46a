//! CLI command for viewing the activity log

use crate::activity::ActivityLogger;
use crate::error::LedgerResult;

/// Print the most recent activity log entries, oldest first
pub fn handle_history_command(logger: &ActivityLogger, count: usize) -> LedgerResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No activity recorded yet.");
        if !logger.is_enabled() {
            println!("Activity logging is disabled in the settings.");
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
