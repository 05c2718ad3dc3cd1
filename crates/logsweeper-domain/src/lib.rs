//! Logsweeper Domain Layer
//!
//! This crate holds the vocabulary shared by the sweeper engine and its hosts.
//! It has ZERO external dependencies and defines the value types and the trait
//! boundaries the engine calls into.
//!
//! ## Key Concepts
//!
//! - **Category**: Severity class derived from a marker in the file name
//! - **FileRecord**: A regular file observed during one scan, with its mtime
//! - **DirectoryScanner**: Capability that lists the files of a log directory
//! - **FileRemover**: Capability that deletes one file
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Filesystem access lives behind the traits in [`traits`]
//! - The `std::fs` adapter lives in the `logsweeper` crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use record::FileRecord;
pub use traits::{DirectoryScanner, FileRemover};
