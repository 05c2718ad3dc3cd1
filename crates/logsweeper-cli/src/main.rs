//! Logsweeper - hosts a log sweeper until Ctrl+C.

use clap::Parser;
use logsweeper::LogSweeper;
use logsweeper_cli::{Cli, HostConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = HostConfig::resolve(&cli)?;

    tracing::info!(
        "Starting log sweeper on {} (press Ctrl+C to exit)",
        config.directory.display()
    );
    let sweeper = LogSweeper::with_config(config);
    sweeper.start()?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received, stopping log sweeper");

    // Joins the worker; blocks for at most one in-flight cycle
    tokio::task::block_in_place(|| sweeper.stop());
    tracing::info!("Final metrics:\n{}", sweeper.metrics().summary());

    Ok(())
}
