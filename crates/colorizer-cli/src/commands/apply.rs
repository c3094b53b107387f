//! Apply command implementation

use std::path::Path;

use colored::Colorize;

use colorizer_core::{AccentSource, Colorizer, GsettingsSource};

use crate::error::Result;

/// Run the apply command
///
/// Applies the given accent value, or the live desktop setting when no
/// value was passed on the command line.
pub fn run_apply(config_dir: &Path, color: Option<&str>) -> Result<()> {
    let value = match color {
        Some(c) => c.to_string(),
        None => GsettingsSource.current()?,
    };

    let shown = if value.is_empty() { "default" } else { value.as_str() };
    println!("{} Applying accent color {}...", "=>".blue().bold(), shown.cyan());

    let colorizer = Colorizer::new(config_dir);
    let report = colorizer.apply(&value)?;
    super::finish_report(&report)
}
