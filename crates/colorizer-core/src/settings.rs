//! Accent color configuration source
//!
//! The accent color lives in the desktop key-value settings store. This
//! module wraps `gsettings` invocations as subprocesses: a one-shot read
//! for `apply`, and a line-oriented monitor for the watch loop.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Settings schema holding the accent color
pub const ACCENT_SCHEMA: &str = "org.gnome.desktop.interface";

/// Settings key for the accent color
pub const ACCENT_KEY: &str = "accent-color";

/// A source for the current raw accent setting value
pub trait AccentSource {
    /// Read the current raw value (named color, `#rrggbb`, or empty)
    fn current(&self) -> Result<String>;
}

/// Reads the accent color via the `gsettings` command line tool
#[derive(Debug, Clone, Copy, Default)]
pub struct GsettingsSource;

impl AccentSource for GsettingsSource {
    fn current(&self) -> Result<String> {
        let output = Command::new("gsettings")
            .args(["get", ACCENT_SCHEMA, ACCENT_KEY])
            .output()
            .map_err(|e| Error::settings(format!("failed to run gsettings: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::settings(format!(
                "gsettings get exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(parse_gvariant_string(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Follow accent color changes until the monitor process exits.
///
/// Spawns `gsettings monitor` and invokes `on_change` with the unquoted
/// value for every change line. The callback is responsible for its own
/// error handling; nothing it does can break the notification stream.
pub fn monitor<F: FnMut(&str)>(mut on_change: F) -> Result<()> {
    let mut child = Command::new("gsettings")
        .args(["monitor", ACCENT_SCHEMA, ACCENT_KEY])
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| Error::settings(format!("failed to spawn gsettings monitor: {e}")))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::settings("gsettings monitor produced no stdout"))?;

    for line in BufReader::new(stdout).lines() {
        let line = line.map_err(|e| Error::settings(format!("monitor read failed: {e}")))?;
        // Lines look like: accent-color: 'red'
        if let Some((key, value)) = line.split_once(':')
            && key.trim() == ACCENT_KEY
        {
            on_change(&parse_gvariant_string(value));
        }
    }

    let _ = child.wait();
    Ok(())
}

/// Unquote a GVariant string value: `'red'` becomes `red`, `''` becomes
/// the empty string. Values without quotes are returned trimmed.
pub fn parse_gvariant_string(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(trimmed)
        .to_string()
}
