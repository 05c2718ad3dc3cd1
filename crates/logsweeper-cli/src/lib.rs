//! Logsweeper host library.
//!
//! Argument parsing and configuration loading for the `logsweeper` binary,
//! which hosts a [`logsweeper::LogSweeper`] until interrupted.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::HostConfig;
pub use error::{CliError, Result};
