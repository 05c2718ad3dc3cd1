//! Configuration for sweep cycles
//!
//! [`SweepConfig`] is the plain value a cycle runs against; [`ConfigStore`] is
//! the lock that lets hosts change it while the worker is running.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Parameters for one sweep cycle
///
/// # Examples
///
/// ```
/// use logsweeper::SweepConfig;
/// use std::time::Duration;
///
/// let config = SweepConfig::default();
/// assert_eq!(config.retention_limit, 10);
/// assert_eq!(config.interval, Duration::from_secs(10));
///
/// let config = SweepConfig::new("/var/log/app")
///     .with_interval(Duration::from_secs(5))
///     .with_retention_limit(5);
/// assert_eq!(config.retention_limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Directory holding the log files
    /// Default: `./log`
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Time to wait between sweep cycles
    /// Default: 10 seconds. Zero is accepted and makes the worker sweep
    /// continuously, which is legal but wasteful.
    #[serde(
        rename = "interval_secs",
        with = "interval_secs",
        default = "default_interval"
    )]
    pub interval: Duration,

    /// Maximum number of files kept per category (0 = unlimited)
    /// Default: 10
    #[serde(default = "default_retention_limit")]
    pub retention_limit: usize,

    /// Dry-run mode: Log what would be removed without actually removing
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,
}

fn default_directory() -> PathBuf {
    PathBuf::from("./log")
}

fn default_interval() -> Duration {
    Duration::from_secs(10)
}

fn default_retention_limit() -> usize {
    10
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            interval: default_interval(),
            retention_limit: default_retention_limit(),
            dry_run: false,
        }
    }
}

impl SweepConfig {
    /// Default configuration pointed at `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Set the wait between cycles
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the per-category retention limit
    pub fn with_retention_limit(mut self, limit: usize) -> Self {
        self.retention_limit = limit;
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether retention is disabled for every category
    pub fn is_unlimited(&self) -> bool {
        self.retention_limit == 0
    }
}

/// Serializes a [`Duration`] as fractional seconds
mod interval_secs {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}

/// Thread-safe holder for the live [`SweepConfig`]
///
/// Every setter and [`ConfigStore::snapshot`] take the same lock, so a cycle
/// never observes a half-applied update. Values are stored as given; nothing
/// is validated.
#[derive(Debug, Default)]
pub struct ConfigStore {
    inner: Mutex<SweepConfig>,
}

impl ConfigStore {
    /// Create a store seeded with `config`
    pub fn new(config: SweepConfig) -> Self {
        Self {
            inner: Mutex::new(config),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SweepConfig> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the directory to sweep
    pub fn set_directory_path(&self, path: impl Into<PathBuf>) {
        self.lock().directory = path.into();
    }

    /// Set the wait between cycles
    pub fn set_interval(&self, interval: Duration) {
        self.lock().interval = interval;
    }

    /// Set the per-category retention limit (0 = unlimited)
    pub fn set_retention_limit(&self, limit: usize) {
        self.lock().retention_limit = limit;
    }

    /// Enable or disable dry-run mode
    pub fn set_dry_run(&self, dry_run: bool) {
        self.lock().dry_run = dry_run;
    }

    /// Copy of the current configuration, read under one lock
    pub fn snapshot(&self) -> SweepConfig {
        self.lock().clone()
    }
}
