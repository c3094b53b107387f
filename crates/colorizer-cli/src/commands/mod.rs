//! Command implementations

mod apply;
mod remove;
mod status;
mod watch;

pub use apply::run_apply;
pub use remove::run_remove;
pub use status::run_status;
pub use watch::run_watch;

use colored::Colorize;
use colorizer_core::SyncReport;

use crate::error::Result;

/// Print a sync report and turn collected target errors into a CLI error
pub(crate) fn finish_report(report: &SyncReport) -> Result<()> {
    for action in &report.actions {
        println!("   {} {}", "-".green(), action);
    }
    for error in &report.errors {
        eprintln!("   {} {}", "!".red(), error);
    }

    if report.success {
        Ok(())
    } else {
        Err(crate::error::CliError::user(
            "some targets could not be updated",
        ))
    }
}
