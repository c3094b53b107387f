//! Error types for colorizer-core

use std::path::PathBuf;

/// Result type for colorizer-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colorizer-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O failure with the path it happened at
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Advisory lock could not be acquired for an atomic write
    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    /// The user configuration directory could not be determined
    #[error("Could not determine the user configuration directory")]
    ConfigDirNotFound,

    /// Reading the accent color setting failed
    #[error("Settings read failed: {message}")]
    Settings { message: String },

    /// Managed block error from colorizer-content
    #[error(transparent)]
    Content(#[from] colorizer_content::Error),

    /// TOML serialization error for the session file
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }
}
