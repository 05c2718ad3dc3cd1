//! Error types for the host application.

use thiserror::Error;

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Host-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
