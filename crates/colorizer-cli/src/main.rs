//! adw-colorizer CLI
//!
//! Synchronizes the desktop accent color into managed blocks inside the
//! user's GTK3 and GTK4 `gtk.css` fragments.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config_dir = resolve_config_dir(cli.config_dir)?;

    match cli.command {
        Commands::Apply { color } => commands::run_apply(&config_dir, color.as_deref()),
        Commands::Remove => commands::run_remove(&config_dir),
        Commands::Watch => commands::run_watch(&config_dir),
        Commands::Status => commands::run_status(&config_dir),
    }
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::config_dir()
            .ok_or_else(|| CliError::user("could not determine the user configuration directory")),
    }
}
