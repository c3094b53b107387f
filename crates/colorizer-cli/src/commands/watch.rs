//! Watch command implementation

use std::path::Path;

use colored::Colorize;

use colorizer_core::{AccentSource, Colorizer, GsettingsSource, settings};

use crate::error::Result;

/// Run the watch command
///
/// Applies the current desktop setting once, then resyncs on every change
/// notification. Failures inside the loop are logged and swallowed so one
/// bad update can never break the notification stream.
pub fn run_watch(config_dir: &Path) -> Result<()> {
    let colorizer = Colorizer::new(config_dir);

    let initial = GsettingsSource.current()?;
    apply_logged(&colorizer, &initial);

    println!(
        "{} Watching {} for accent color changes...",
        "=>".blue().bold(),
        colorizer_core::ACCENT_SCHEMA.cyan()
    );

    settings::monitor(|value| apply_logged(&colorizer, value))?;
    Ok(())
}

fn apply_logged(colorizer: &Colorizer, value: &str) {
    match colorizer.apply(value) {
        Ok(report) => {
            for action in &report.actions {
                tracing::info!("{action}");
            }
            for error in &report.errors {
                tracing::error!("{error}");
            }
        }
        Err(e) => tracing::error!(error = %e, "accent update failed"),
    }
}
