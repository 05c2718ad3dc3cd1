//! FileRecord module - one file observed during a scan

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::Category;

/// A regular file seen by a [`DirectoryScanner`](crate::DirectoryScanner)
///
/// Records are produced fresh on every scan and never cached between sweep
/// cycles, so `modified_at` reflects the file as it was when listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path to the file
    pub path: PathBuf,

    /// Last modification time
    pub modified_at: SystemTime,
}

impl FileRecord {
    /// Create a new record
    pub fn new(path: impl Into<PathBuf>, modified_at: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified_at,
        }
    }

    /// Get the path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final component of the path, lossily decoded
    ///
    /// Empty when the path has no file name (e.g. it ends in `..`).
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Category derived from the file name
    pub fn category(&self) -> Category {
        Category::classify(&self.file_name())
    }
}
