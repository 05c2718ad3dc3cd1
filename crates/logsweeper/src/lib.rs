//! Logsweeper
//!
//! Background log-retention sweeper, embedded in a host process.
//!
//! # Overview
//!
//! The sweeper periodically scans one directory and enforces a maximum file
//! count per severity category, removing the oldest excess files:
//! - **Categorization**: `INFO`, `WARNING` and `ERROR` markers in file names
//!   (checked in that order, first match wins); other files are left alone
//! - **Retention**: the newest `retention_limit` files of each category are
//!   kept, the rest removed; a limit of 0 disables removal
//! - **Scheduling**: one worker thread per sweeper, waking every `interval`
//! - **Lifecycle**: `start`/`stop` from any thread; `stop` wakes the worker
//!   and waits for it, letting an in-progress cycle complete
//!
//! Failures never escape to the host: an unreadable directory is an empty
//! scan, a failed removal is logged and retried on the next cycle, and an
//! unexpected failure inside a cycle is logged and the worker carries on.
//!
//! # Usage
//!
//! ## Background Worker
//!
//! ```no_run
//! use logsweeper::LogSweeper;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sweeper = LogSweeper::new();
//! sweeper.set_directory_path("./log/");
//! sweeper.set_interval_secs(5);
//! sweeper.set_retention_limit(5);
//! sweeper.start()?;
//!
//! // Host work happens here; dropping the sweeper also stops it
//! sweeper.stop();
//! # Ok(())
//! # }
//! ```
//!
//! ## One-time Sweep
//!
//! ```no_run
//! use logsweeper::{sweep_once, FsDirectory, SweepConfig};
//!
//! let config = SweepConfig::new("./log").with_retention_limit(5);
//! let report = sweep_once(&config, &FsDirectory);
//! println!("Removed: {}", report.total_removed());
//! ```
//!
//! # Configuration
//!
//! [`SweepConfig`] deserializes from TOML:
//!
//! ```toml
//! directory = "./log"
//! interval_secs = 10
//! retention_limit = 10
//! dry_run = false
//! ```

#![warn(missing_docs)]

mod categorizer;
mod config;
mod error;
mod metrics;
mod retention;
mod scanner;
mod sweep;
mod sweeper;

#[cfg(test)]
mod testing;

pub use categorizer::{categorize, CategorizedFiles};
pub use config::{ConfigStore, SweepConfig};
pub use error::SweeperError;
pub use metrics::SweeperMetrics;
pub use retention::{sort_newest_first, EnforcementOutcome, RetentionEnforcer};
pub use scanner::FsDirectory;
pub use sweep::{sweep_once, SweepReport};
pub use sweeper::{LogSweeper, SweeperState};

pub use logsweeper_domain::{Category, DirectoryScanner, FileRecord, FileRemover};
