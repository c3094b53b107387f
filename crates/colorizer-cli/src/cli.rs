//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// adw-colorizer - Sync the desktop accent color into your GTK stylesheets
#[derive(Parser, Debug)]
#[command(name = "colorizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration root holding gtk-3.0/ and gtk-4.0/ (defaults to the
    /// user configuration directory)
    #[arg(long, global = true, value_name = "DIR", env = "COLORIZER_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Apply an accent color to the managed stylesheet blocks
    ///
    /// Examples:
    ///   colorizer apply red        # named palette color
    ///   colorizer apply '#aabbcc'  # literal hex
    ///   colorizer apply            # read the live desktop setting
    Apply {
        /// Accent value: a palette name, a #rrggbb hex, or omitted to read
        /// the current desktop setting
        color: Option<String>,
    },

    /// Remove the managed blocks and restore prior content
    Remove,

    /// Follow accent color changes and resync on each one
    Watch,

    /// Show the state of the managed files
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_accepts_an_optional_color() {
        let cli = Cli::parse_from(["colorizer", "apply", "red"]);
        assert_eq!(
            cli.command,
            Commands::Apply {
                color: Some("red".to_string())
            }
        );

        let cli = Cli::parse_from(["colorizer", "apply"]);
        assert_eq!(cli.command, Commands::Apply { color: None });
    }

    #[test]
    fn config_dir_is_a_global_flag() {
        let cli = Cli::parse_from(["colorizer", "status", "--config-dir", "/tmp/cfg"]);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/cfg")));
    }
}
