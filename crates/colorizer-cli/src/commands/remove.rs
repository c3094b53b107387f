//! Remove command implementation

use std::path::Path;

use colored::Colorize;

use colorizer_core::Colorizer;

use crate::error::Result;

/// Run the remove command
///
/// Strips the managed blocks from both stylesheet fragments, restoring
/// prior content and retiring any backups this session created.
pub fn run_remove(config_dir: &Path) -> Result<()> {
    println!("{} Removing managed blocks...", "=>".blue().bold());

    let colorizer = Colorizer::new(config_dir);
    let report = colorizer.remove()?;
    super::finish_report(&report)
}
