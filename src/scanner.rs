use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// A direct child of a scanned folder
#[derive(Debug, Clone)]
pub struct FolderEntry {
    pub name: OsString,
    pub path: PathBuf,
    pub is_file: bool,
}

impl FolderEntry {
    /// The entry name, if it is valid UTF-8
    pub fn name_str(&self) -> Option<&str> {
        self.name.to_str()
    }
}

/// Confirm `target` is an existing directory
pub fn ensure_directory(target: &Path) -> Result<(), ScannerError> {
    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    Ok(())
}

/// List the direct children of `target` (non-recursive), sorted by name.
///
/// Files and subdirectories are both returned; `is_file` tells them apart.
pub fn scan_folder(target: &Path) -> Result<Vec<FolderEntry>, ScannerError> {
    debug!(path = ?target, "Scanning folder");

    ensure_directory(target)?;

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        // file_type() does not follow symlinks, so every link counts as a file
        let file_type = entry.file_type()?;
        let is_file = !file_type.is_dir();

        trace!(entry = ?entry.path(), is_file, "Examining entry");

        entries.push(FolderEntry {
            name: entry.file_name(),
            path: entry.path(),
            is_file,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
