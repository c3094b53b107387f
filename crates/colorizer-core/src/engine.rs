//! Synchronizes the accent color into the managed stylesheet blocks
//!
//! The `Colorizer` coordinates accent resolution, session state, and the
//! per-target file edits. Per-target failures are logged and collected in
//! the report so one broken file never blocks the other target, and a
//! failed removal restores the file from its backup before surfacing the
//! error.

use std::path::{Path, PathBuf};

use colorizer_content::{ManagedBlock, remove, upsert};

use crate::accent::ResolvedAccent;
use crate::error::Result;
use crate::io;
use crate::session::Session;
use crate::target::Target;

/// Directory under the user config root holding this tool's own state
const STATE_DIR: &str = "adw-colorizer";

/// Session state file name
const SESSION_FILE: &str = "session.toml";

/// Backup path for a managed file: the same path with `.bak` appended
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Report from an apply or remove operation
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Whether every target was handled successfully
    pub success: bool,
    /// Actions taken, one entry per touched file
    pub actions: Vec<String>,
    /// Per-target errors encountered
    pub errors: Vec<String>,
}

impl SyncReport {
    fn new() -> Self {
        Self {
            success: true,
            actions: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn record(&mut self, target: Target, outcome: Result<String>) {
        match outcome {
            Ok(action) => self.actions.push(action),
            Err(e) => {
                tracing::error!(error = %e, "sync failed for {}", target.name());
                self.errors.push(format!("{}: {}", target.name(), e));
                self.success = false;
            }
        }
    }
}

/// State of the managed block in one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// The target file does not exist
    FileMissing,
    /// The file exists but holds no managed block
    Absent,
    /// The managed block is present and well-formed
    Present,
    /// A start marker exists without its end marker
    Corrupt,
    /// The file exists but could not be read
    Unreadable,
}

/// Status of one target, as reported by [`Colorizer::status`]
#[derive(Debug, Clone)]
pub struct TargetStatus {
    pub target: Target,
    pub path: PathBuf,
    pub block: BlockState,
    /// Whether a `.bak` counterpart exists
    pub backup_exists: bool,
    /// Whether the current session created that backup
    pub backup_owned: bool,
}

/// Engine keeping the managed stylesheet blocks in sync with the accent color
pub struct Colorizer {
    config_dir: PathBuf,
    session_path: PathBuf,
}

impl Colorizer {
    /// Create an engine rooted at the given configuration directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let session_path = config_dir.join(STATE_DIR).join(SESSION_FILE);
        Self {
            config_dir,
            session_path,
        }
    }

    /// Create an engine rooted at the user's configuration directory
    pub fn from_user_config() -> Result<Self> {
        let config_dir = dirs::config_dir().ok_or(crate::Error::ConfigDirNotFound)?;
        Ok(Self::new(config_dir))
    }

    /// The configuration directory this engine manages files under
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Apply a raw accent setting value to all targets.
    ///
    /// Invalid values resolve to the default accent (with a warning) rather
    /// than aborting. Each target is handled independently; failures are
    /// collected in the report.
    pub fn apply(&self, raw_setting: &str) -> Result<SyncReport> {
        let accent = ResolvedAccent::resolve(raw_setting);
        tracing::debug!(hex = %accent.hex, named = accent.is_named(), "applying accent");

        let mut session = Session::load(&self.session_path);
        let mut report = SyncReport::new();

        for target in Target::ALL {
            let outcome = self.apply_target(target, &accent, &mut session);
            report.record(target, outcome);
        }

        // An empty session has nothing worth persisting; don't create the
        // state file just to hold an empty list.
        if !session.is_empty() || self.session_path.exists() {
            session.save(&self.session_path)?;
        }
        Ok(report)
    }

    /// Remove the managed blocks from all targets and end the session.
    ///
    /// Restores prior content where the block was the only content, and
    /// deletes only backups this session created.
    pub fn remove(&self) -> Result<SyncReport> {
        let mut session = Session::load(&self.session_path);
        let mut report = SyncReport::new();

        for target in Target::ALL {
            let css_path = target.css_path(&self.config_dir);
            let outcome = self.remove_target(target, &css_path, &mut session);
            report.record(target, outcome);
        }

        if session.is_empty() {
            if self.session_path.exists()
                && let Err(e) = io::remove_file(&self.session_path)
            {
                tracing::warn!(error = %e, "failed to remove session file");
            }
        } else {
            session.save(&self.session_path)?;
        }

        Ok(report)
    }

    /// Report the managed state of every target
    pub fn status(&self) -> Vec<TargetStatus> {
        let session = Session::load(&self.session_path);

        Target::ALL
            .iter()
            .map(|&target| {
                let path = target.css_path(&self.config_dir);
                let backup = backup_path_for(&path);

                let block = if !path.exists() {
                    BlockState::FileMissing
                } else {
                    match io::read_text_lossy(&path)
                        .map(|content| target.markers().is_present(&content))
                    {
                        Ok(Ok(true)) => BlockState::Present,
                        Ok(Ok(false)) => BlockState::Absent,
                        Ok(Err(_)) => BlockState::Corrupt,
                        Err(_) => BlockState::Unreadable,
                    }
                };

                TargetStatus {
                    target,
                    path,
                    block,
                    backup_exists: backup.exists(),
                    backup_owned: session.owns_backup(&backup),
                }
            })
            .collect()
    }

    fn apply_target(
        &self,
        target: Target,
        accent: &ResolvedAccent,
        session: &mut Session,
    ) -> Result<String> {
        let css_path = target.css_path(&self.config_dir);

        match target.render(accent) {
            Some(body) => self.upsert_target(target, &css_path, body, session),
            // This target cannot express the accent; its block goes away.
            None => self.remove_target(target, &css_path, session),
        }
    }

    fn upsert_target(
        &self,
        target: Target,
        css_path: &Path,
        body: String,
        session: &mut Session,
    ) -> Result<String> {
        io::ensure_parent_dir(css_path)?;

        let backup_path = backup_path_for(css_path);
        let original = if css_path.exists() {
            let content = io::read_text_lossy(css_path)?;
            // One-shot backup before the first write of the session. A
            // pre-existing .bak is neither overwritten nor claimed.
            match io::copy_if_absent(css_path, &backup_path) {
                Ok(true) => session.record_backup(&backup_path),
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(path = %backup_path.display(), error = %e, "backup creation failed, proceeding without");
                }
            }
            content
        } else {
            String::new()
        };

        let block = ManagedBlock::new(target.markers(), body);
        let updated = upsert(&original, &block)?;
        io::write_atomic(css_path, &updated)?;

        Ok(format!("Updated {}", css_path.display()))
    }

    fn remove_target(
        &self,
        target: Target,
        css_path: &Path,
        session: &mut Session,
    ) -> Result<String> {
        let backup_path = backup_path_for(css_path);

        if !css_path.exists() {
            // The managed file is gone; a backup this session created is an
            // orphan and gets cleaned up. Anything else is left untouched.
            if backup_path.exists() && session.owns_backup(&backup_path) {
                if let Err(e) = io::remove_file(&backup_path) {
                    tracing::warn!(path = %backup_path.display(), error = %e, "failed to delete orphaned backup");
                } else {
                    session.forget_backup(&backup_path);
                }
                return Ok(format!("Removed orphaned backup {}", backup_path.display()));
            }
            return Ok(format!("Nothing to remove for {}", css_path.display()));
        }

        match self.strip_block(target, css_path) {
            Ok(Some(action)) => {
                self.retire_backup(&backup_path, session);
                Ok(action)
            }
            Ok(None) => {
                // No managed block; the file is left untouched, but the
                // block is gone so the session backup has served its purpose.
                self.retire_backup(&backup_path, session);
                Ok(format!("No managed block in {}", css_path.display()))
            }
            Err(e) => {
                // Avoid leaving a half-edited file behind: put the backup
                // back before surfacing the failure. Only a backup this
                // session created may be consumed; a user-made .bak stays,
                // and the file is surfaced as-is.
                if backup_path.exists() && session.owns_backup(&backup_path) {
                    match io::copy_overwrite(&backup_path, css_path)
                        .and_then(|()| io::remove_file(&backup_path))
                    {
                        Ok(()) => {
                            session.forget_backup(&backup_path);
                            tracing::warn!(path = %css_path.display(), "removal failed, restored from backup");
                        }
                        Err(restore_err) => {
                            tracing::error!(path = %css_path.display(), error = %restore_err, "restore from backup failed");
                        }
                    }
                }
                Err(e)
            }
        }
    }

    /// Strip the managed block from an existing file.
    ///
    /// Returns `Ok(None)` when no block was present, `Ok(Some(action))`
    /// after a successful edit.
    fn strip_block(&self, target: Target, css_path: &Path) -> Result<Option<String>> {
        let contents = io::read_text_lossy(css_path)?;

        let Some(remaining) = remove(&contents, &target.markers())? else {
            return Ok(None);
        };

        if remaining.is_empty() {
            io::remove_file(css_path)?;
            Ok(Some(format!("Removed {}", css_path.display())))
        } else {
            io::write_atomic(css_path, &format!("{remaining}\n"))?;
            Ok(Some(format!("Removed managed block from {}", css_path.display())))
        }
    }

    /// Delete a session-owned backup after a successful removal.
    ///
    /// A backup that pre-existed the session stays. A failed delete is
    /// logged but never re-triggers the restore path.
    fn retire_backup(&self, backup_path: &Path, session: &mut Session) {
        if backup_path.exists() && session.owns_backup(backup_path) {
            if let Err(e) = io::remove_file(backup_path) {
                tracing::warn!(path = %backup_path.display(), error = %e, "failed to delete session backup");
            } else {
                session.forget_backup(backup_path);
            }
        } else if session.owns_backup(backup_path) {
            // Recorded but already gone on disk.
            session.forget_backup(backup_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn backup_path_appends_bak_to_the_full_name() {
        assert_eq!(
            backup_path_for(Path::new("/home/u/.config/gtk-3.0/gtk.css")),
            PathBuf::from("/home/u/.config/gtk-3.0/gtk.css.bak")
        );
    }
}
