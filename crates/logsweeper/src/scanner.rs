//! `std::fs` adapter for the directory capabilities

use logsweeper_domain::{DirectoryScanner, FileRecord, FileRemover};
use std::fs;
use std::io;
use std::path::Path;

/// Local filesystem implementation of [`DirectoryScanner`] and [`FileRemover`]
///
/// Symbolic links are never followed: an entry is listed only when the
/// directory entry itself is a regular file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectory;

impl FsDirectory {
    /// Create a new filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryScanner for FsDirectory {
    fn scan(&self, directory: &Path) -> Vec<FileRecord> {
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    directory = %directory.display(),
                    error = %e,
                    "Log directory unavailable, nothing to sweep"
                );
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                // DirEntry::file_type does not traverse symlinks
                if !entry.file_type().ok()?.is_file() {
                    return None;
                }
                let modified_at = entry.metadata().ok()?.modified().ok()?;
                Some(FileRecord::new(entry.path(), modified_at))
            })
            .collect()
    }
}

impl FileRemover for FsDirectory {
    type Error = io::Error;

    fn remove_file(&self, path: &Path) -> Result<(), Self::Error> {
        fs::remove_file(path)
    }
}
