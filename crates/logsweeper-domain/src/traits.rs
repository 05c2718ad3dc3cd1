//! Trait definitions for external interactions
//!
//! These traits define the boundary between the sweep logic and the filesystem.
//! The `std::fs` implementation lives in the `logsweeper` crate; tests use
//! in-memory fakes.

use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use crate::FileRecord;

/// Lists the regular files directly inside a directory
///
/// Implementations must be non-recursive and must exclude symbolic links,
/// subdirectories and special files. A directory that is missing or unreadable
/// yields an empty list rather than an error: transient unavailability of the
/// log directory is not a failure of the sweep.
pub trait DirectoryScanner {
    /// Scan `directory` and return one record per regular file
    fn scan(&self, directory: &Path) -> Vec<FileRecord>;
}

/// Deletes a single file
pub trait FileRemover {
    /// Error type for remove operations
    type Error: Display;

    /// Remove the file at `path`
    fn remove_file(&self, path: &Path) -> Result<(), Self::Error>;
}

impl<T: DirectoryScanner + ?Sized> DirectoryScanner for Arc<T> {
    fn scan(&self, directory: &Path) -> Vec<FileRecord> {
        (**self).scan(directory)
    }
}

impl<T: FileRemover + ?Sized> FileRemover for Arc<T> {
    type Error = T::Error;

    fn remove_file(&self, path: &Path) -> Result<(), Self::Error> {
        (**self).remove_file(path)
    }
}
