//! Atomic I/O operations on user-owned files
//!
//! All writes use a write-to-temp-then-rename strategy so a reader never
//! observes a half-written stylesheet. Reads decode bytes as UTF-8 lossily;
//! a stray invalid byte in a user-edited file must not abort the sync.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::error::{Error, Result};

/// Read a whole file, decoding its bytes as UTF-8 with replacement.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write content atomically to a file with locking.
///
/// Writes to a temp file in the same directory (same filesystem), then
/// renames over the target. An advisory lock guards the temp file while
/// content is flushed.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))
}

/// Create the parent directory of `path`, with parents, if missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Copy `source` to `dest` only when `dest` does not already exist.
///
/// Returns whether a copy was made. This is the "create if absent" backup
/// variant: a pre-existing file at `dest` is left untouched.
pub fn copy_if_absent(source: &Path, dest: &Path) -> Result<bool> {
    if dest.exists() {
        return Ok(false);
    }
    fs::copy(source, dest).map_err(|e| Error::io(dest, e))?;
    Ok(true)
}

/// Copy `source` over `dest`, replacing any existing file.
pub fn copy_overwrite(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).map_err(|e| Error::io(dest, e))?;
    Ok(())
}

/// Delete a file.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gtk-3.0").join("gtk.css");

        write_atomic(&path, "body {}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "body {}\n");
    }

    #[test]
    fn write_atomic_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gtk.css");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_atomic_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gtk.css");
        write_atomic(&path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("gtk.css")]);
    }

    #[test]
    fn read_text_lossy_tolerates_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gtk.css");
        fs::write(&path, b"body {}\n\xff\xfe").unwrap();

        let text = read_text_lossy(&path).unwrap();
        assert!(text.starts_with("body {}\n"));
    }

    #[test]
    fn copy_if_absent_does_not_clobber() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("gtk.css");
        let dest = dir.path().join("gtk.css.bak");
        fs::write(&source, "current").unwrap();
        fs::write(&dest, "pre-existing").unwrap();

        assert!(!copy_if_absent(&source, &dest).unwrap());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "pre-existing");
    }

    #[test]
    fn copy_if_absent_copies_when_missing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("gtk.css");
        let dest = dir.path().join("gtk.css.bak");
        fs::write(&source, "current").unwrap();

        assert!(copy_if_absent(&source, &dest).unwrap());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "current");
    }

    #[test]
    fn read_missing_file_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.css");
        let err = read_text_lossy(&path).unwrap_err();
        assert!(format!("{err}").contains("absent.css"));
    }
}
