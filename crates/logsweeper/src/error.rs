//! Error types for sweeper operations

use thiserror::Error;

/// Errors that can occur while driving the sweeper
#[derive(Error, Debug)]
pub enum SweeperError {
    /// The worker thread could not be spawned
    #[error("Failed to spawn sweeper worker: {0}")]
    Spawn(#[source] std::io::Error),
}
