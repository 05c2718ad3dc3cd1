//! Configuration loading for the host.
//!
//! Settings come from, in increasing priority: built-in defaults, an optional
//! TOML file with a `[sweeper]` table, and command-line flags.

use crate::cli::Cli;
use crate::error::Result;
use logsweeper::SweepConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Host configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostConfig {
    /// Sweeper settings
    #[serde(default)]
    pub sweeper: SweepConfig,
}

impl HostConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Build the effective sweeper configuration for `cli`.
    pub fn resolve(cli: &Cli) -> Result<SweepConfig> {
        let file = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(file.apply(cli))
    }

    /// Apply command-line overrides on top of the file settings.
    pub fn apply(self, cli: &Cli) -> SweepConfig {
        let mut config = self.sweeper;

        if let Some(dir) = &cli.dir {
            config.directory = dir.clone();
        }
        if let Some(secs) = cli.interval {
            config.interval = Duration::from_secs(secs);
        }
        if let Some(limit) = cli.limit {
            config.retention_limit = limit;
        }
        if cli.dry_run {
            config.dry_run = true;
        }

        config
    }
}
