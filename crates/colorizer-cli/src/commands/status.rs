//! Status command implementation

use std::path::Path;

use colored::Colorize;

use colorizer_core::{BlockState, Colorizer};

use crate::error::Result;

/// Run the status command
///
/// Shows, per target, whether the managed block is present and whether a
/// backup exists (and who owns it).
pub fn run_status(config_dir: &Path) -> Result<()> {
    let colorizer = Colorizer::new(config_dir);

    for status in colorizer.status() {
        let state = match status.block {
            BlockState::Present => "managed".green().bold(),
            BlockState::Absent => "no block".dimmed(),
            BlockState::FileMissing => "missing".dimmed(),
            BlockState::Corrupt => "corrupt".red().bold(),
            BlockState::Unreadable => "unreadable".red().bold(),
        };

        println!(
            "{:>5} {} [{}]",
            status.target.name().cyan(),
            status.path.display(),
            state
        );

        if status.backup_exists {
            let owner = if status.backup_owned {
                "created this session"
            } else {
                "pre-existing, left alone"
            };
            println!("      backup present ({owner})");
        }
    }

    Ok(())
}
