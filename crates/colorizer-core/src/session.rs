//! Session state: which backup files this tool created
//!
//! A session spans one enable-to-disable cycle. The removal path may only
//! delete a backup that was created during the same session; a `.bak` file
//! the user made themselves must survive. Because enable and disable can
//! be separate process invocations, the session is persisted as a small
//! TOML file instead of in-memory flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io;

/// Persistent record of the backups created during the current session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session format version for forward compatibility
    version: String,
    /// Backup files created by this tool, absolute paths
    created_backups: Vec<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a new empty session
    pub fn new() -> Self {
        Self {
            version: "1.0".to_string(),
            created_backups: Vec::new(),
        }
    }

    /// Load a session from its TOML file.
    ///
    /// A missing file means a fresh session. A corrupt file degrades to a
    /// fresh session with a warning: an empty session never claims any
    /// backup, so this errs on the side of leaving files alone.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        match io::read_text_lossy(path).map(|content| toml::from_str::<Session>(&content)) {
            Ok(Ok(session)) => session,
            Ok(Err(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt session file, starting fresh");
                Self::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable session file, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the session atomically as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        io::write_atomic(path, &content)
    }

    /// Record a backup file created by this tool
    pub fn record_backup(&mut self, path: &Path) {
        if !self.owns_backup(path) {
            self.created_backups.push(path.to_path_buf());
        }
    }

    /// Whether this session created the given backup file
    pub fn owns_backup(&self, path: &Path) -> bool {
        self.created_backups.iter().any(|p| p == path)
    }

    /// Drop a backup from the session record
    pub fn forget_backup(&mut self, path: &Path) {
        self.created_backups.retain(|p| p != path);
    }

    /// Whether the session tracks no backups
    pub fn is_empty(&self) -> bool {
        self.created_backups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_is_a_fresh_session() {
        let dir = tempdir().unwrap();
        let session = Session::load(&dir.path().join("session.toml"));
        assert!(session.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        let backup = dir.path().join("gtk.css.bak");

        let mut session = Session::new();
        session.record_backup(&backup);
        session.save(&path).unwrap();

        let loaded = Session::load(&path);
        assert!(loaded.owns_backup(&backup));
    }

    #[test]
    fn corrupt_file_degrades_to_fresh_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not [ valid { toml").unwrap();

        let session = Session::load(&path);
        assert!(session.is_empty());
    }

    #[test]
    fn record_backup_is_deduplicated() {
        let backup = PathBuf::from("/tmp/gtk.css.bak");
        let mut session = Session::new();
        session.record_backup(&backup);
        session.record_backup(&backup);
        session.forget_backup(&backup);
        assert!(session.is_empty());
    }

    #[test]
    fn forget_backup_removes_only_the_given_path() {
        let mut session = Session::new();
        session.record_backup(Path::new("/a/gtk.css.bak"));
        session.record_backup(Path::new("/b/gtk.css.bak"));
        session.forget_backup(Path::new("/a/gtk.css.bak"));

        assert!(!session.owns_backup(Path::new("/a/gtk.css.bak")));
        assert!(session.owns_backup(Path::new("/b/gtk.css.bak")));
        assert_eq!(session.is_empty(), false);
    }
}
