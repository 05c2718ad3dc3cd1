//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Logsweeper - keep a log directory within a per-severity file budget.
#[derive(Debug, Parser)]
#[command(name = "logsweeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the log files
    #[arg(short, long, env = "LOGSWEEPER_DIR")]
    pub dir: Option<PathBuf>,

    /// Seconds to wait between sweeps
    #[arg(short, long, env = "LOGSWEEPER_INTERVAL")]
    pub interval: Option<u64>,

    /// Files kept per severity (0 = unlimited)
    #[arg(short, long, env = "LOGSWEEPER_LIMIT")]
    pub limit: Option<usize>,

    /// Log what would be removed without removing it
    #[arg(long, env = "LOGSWEEPER_DRY_RUN")]
    pub dry_run: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, env = "LOGSWEEPER_CONFIG")]
    pub config: Option<PathBuf>,
}
