//! Directory traversal and cleanup
//!
//! [`FluentDirectory`] wraps a validated directory path and offers a
//! stable, sorted view of its contents plus recursive cleanup. Listings
//! use `/`-joined relative paths regardless of platform.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, UtilsError};

/// Wrapper over an existing directory
///
/// # Example
///
/// ```rust
/// use fluent_utils::directory::FluentDirectory;
///
/// let tmp = tempfile::tempdir()?;
/// std::fs::write(tmp.path().join("note.txt"), "hi")?;
///
/// let dir = FluentDirectory::new(tmp.path())?;
/// assert_eq!(dir.content_list(false)?, vec!["note.txt"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentDirectory {
    path: PathBuf,
}

impl FluentDirectory {
    /// Wrap a directory path
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::InvalidArgument`] when the path does not
    /// exist or points to something other than a directory.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Err(UtilsError::invalid_argument(format!(
                "Path \"{}\" does not exist!",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(UtilsError::invalid_argument(format!(
                "Path \"{}\" is not a directory!",
                path.display()
            )));
        }

        Ok(FluentDirectory { path })
    }

    /// The wrapped directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List directory contents as relative paths
    ///
    /// Each level lists subdirectories first, sorted by name, then files,
    /// sorted by name. With `recursive`, every directory entry is
    /// immediately followed by its own listing, so nested content stays
    /// grouped under its parent.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Io`] when a directory cannot be read.
    pub fn content_list(&self, recursive: bool) -> Result<Vec<String>> {
        list_relative(&self.path, recursive)
    }

    /// Delete all contents, keeping the directory itself
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Io`] when an entry cannot be removed.
    pub fn clear(&self) -> Result<()> {
        let contents = self.content_list(true)?;
        debug!(
            path = %self.path.display(),
            entries = contents.len(),
            "clearing directory"
        );

        // Reverse order guarantees children go before their parent
        for item in contents.iter().rev() {
            let item_path = self.path.join(item);
            if item_path.is_dir() {
                fs::remove_dir(&item_path)?;
            } else {
                fs::remove_file(&item_path)?;
            }
        }

        Ok(())
    }

    /// Delete the directory with all its contents
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Io`] when an entry cannot be removed.
    pub fn delete(self) -> Result<()> {
        self.clear()?;
        fs::remove_dir(&self.path)?;
        Ok(())
    }
}

fn list_relative(path: &Path, recursive: bool) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((name, entry.path().is_dir()));
    }
    entries.sort();

    let mut listed = Vec::new();
    let mut files = Vec::new();
    for (name, is_dir) in entries {
        if is_dir {
            if recursive {
                let nested = list_relative(&path.join(&name), true)?;
                listed.push(name.clone());
                listed.extend(nested.into_iter().map(|item| format!("{name}/{item}")));
            } else {
                listed.push(name);
            }
        } else {
            files.push(name);
        }
    }
    listed.extend(files);

    Ok(listed)
}
