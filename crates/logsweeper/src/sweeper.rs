//! Background worker that sweeps a log directory on a schedule

use crate::{sweep_once, ConfigStore, FsDirectory, SweepConfig, SweeperError, SweeperMetrics};
use logsweeper_domain::{DirectoryScanner, FileRemover};
use std::any::Any;
use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Observable lifecycle of a [`LogSweeper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweeperState {
    /// No worker thread
    Idle,

    /// Worker thread active and sweeping on schedule
    Running,

    /// Cancellation signalled; waiting for the worker to exit
    StopRequested,
}

enum Lifecycle {
    Idle,
    Running(JoinHandle<()>),
    StopRequested,
}

impl Lifecycle {
    fn state(&self) -> SweeperState {
        match self {
            Lifecycle::Idle => SweeperState::Idle,
            Lifecycle::Running(_) => SweeperState::Running,
            Lifecycle::StopRequested => SweeperState::StopRequested,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}

/// State shared between the owning [`LogSweeper`] and its worker thread
struct Shared<D> {
    config: ConfigStore,
    directory: D,
    cancelled: Mutex<bool>,
    wake: Condvar,
    metrics: Mutex<SweeperMetrics>,
}

impl<D> Shared<D>
where
    D: DirectoryScanner + FileRemover,
{
    fn run(&self) {
        tracing::info!("Log sweeper worker started");

        loop {
            let interval = self.config.snapshot().interval;
            if self.wait_for_wake(interval) {
                break;
            }
            self.run_cycle();
        }

        tracing::info!(
            "Log sweeper worker stopped. Final metrics:\n{}",
            lock(&self.metrics).summary()
        );
    }

    /// Block for up to `interval`, returning true once cancellation is requested
    fn wait_for_wake(&self, interval: Duration) -> bool {
        let cancelled = lock(&self.cancelled);
        let (cancelled, _) = self
            .wake
            .wait_timeout_while(cancelled, interval, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        *cancelled
    }

    fn run_cycle(&self) {
        let config = self.config.snapshot();
        let started = Instant::now();

        tracing::debug!(directory = %config.directory.display(), "Starting sweep cycle");

        let result = panic::catch_unwind(AssertUnwindSafe(|| sweep_once(&config, &self.directory)));
        let elapsed = started.elapsed();

        match result {
            Ok(report) => {
                if report.total_removed() > 0 || report.total_failed() > 0 {
                    tracing::info!(
                        "Sweep completed: {} removed, {} failed, {} retained",
                        report.total_removed(),
                        report.total_failed(),
                        report.total_retained()
                    );
                } else {
                    tracing::debug!(scanned = report.scanned, "Sweep completed with nothing to remove");
                }
                lock(&self.metrics).record_sweep(&report, elapsed);
            }
            Err(payload) => {
                tracing::error!(
                    directory = %config.directory.display(),
                    reason = panic_message(payload.as_ref()),
                    "Sweep cycle aborted by unexpected failure"
                );
                lock(&self.metrics).record_aborted(elapsed);
            }
        }
    }
}

/// Embeddable log-retention sweeper
///
/// Owns one worker thread that wakes every `interval`, scans the configured
/// directory and keeps at most `retention_limit` files per severity category,
/// removing the oldest. All methods take `&self`, so the sweeper can be shared
/// across threads (e.g. behind an [`Arc`]).
///
/// Configuration setters never block on lifecycle transitions and vice versa;
/// a change is picked up at the start of the next cycle. [`LogSweeper::stop`]
/// interrupts the wait between cycles but lets an in-progress cycle finish.
/// Dropping the sweeper stops it.
///
/// # Examples
///
/// ```no_run
/// use logsweeper::LogSweeper;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let sweeper = LogSweeper::new();
/// sweeper.set_directory_path("./log/");
/// sweeper.set_interval_secs(5);
/// sweeper.set_retention_limit(5);
///
/// sweeper.start()?;
/// // ... host runs ...
/// sweeper.stop();
/// println!("{}", sweeper.metrics().summary());
/// # Ok(())
/// # }
/// ```
pub struct LogSweeper<D = FsDirectory>
where
    D: DirectoryScanner + FileRemover + Send + Sync + 'static,
{
    shared: Arc<Shared<D>>,
    lifecycle: Mutex<Lifecycle>,
    lifecycle_changed: Condvar,
}

impl LogSweeper<FsDirectory> {
    /// Create a sweeper over the local filesystem with default configuration
    pub fn new() -> Self {
        Self::with_config(SweepConfig::default())
    }

    /// Create a sweeper over the local filesystem
    pub fn with_config(config: SweepConfig) -> Self {
        Self::with_directory(config, FsDirectory)
    }
}

impl Default for LogSweeper<FsDirectory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> LogSweeper<D>
where
    D: DirectoryScanner + FileRemover + Send + Sync + 'static,
{
    /// Create a sweeper backed by a custom directory implementation
    pub fn with_directory(config: SweepConfig, directory: D) -> Self {
        Self {
            shared: Arc::new(Shared {
                config: ConfigStore::new(config),
                directory,
                cancelled: Mutex::new(false),
                wake: Condvar::new(),
                metrics: Mutex::new(SweeperMetrics::new()),
            }),
            lifecycle: Mutex::new(Lifecycle::Idle),
            lifecycle_changed: Condvar::new(),
        }
    }

    /// Set the directory to sweep
    pub fn set_directory_path(&self, path: impl Into<PathBuf>) {
        self.shared.config.set_directory_path(path);
    }

    /// Set the wait between cycles
    ///
    /// Zero is accepted: the worker then sweeps back to back.
    pub fn set_interval(&self, interval: Duration) {
        self.shared.config.set_interval(interval);
    }

    /// Set the wait between cycles in whole seconds
    pub fn set_interval_secs(&self, secs: u64) {
        self.set_interval(Duration::from_secs(secs));
    }

    /// Set the per-category retention limit (0 = unlimited)
    pub fn set_retention_limit(&self, limit: usize) {
        self.shared.config.set_retention_limit(limit);
    }

    /// Enable or disable dry-run mode
    pub fn set_dry_run(&self, dry_run: bool) {
        self.shared.config.set_dry_run(dry_run);
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> SweepConfig {
        self.shared.config.snapshot()
    }

    /// Current lifecycle state
    pub fn state(&self) -> SweeperState {
        lock(&self.lifecycle).state()
    }

    /// Whether a worker thread is active
    pub fn is_running(&self) -> bool {
        self.state() == SweeperState::Running
    }

    /// Copy of the cumulative metrics
    pub fn metrics(&self) -> SweeperMetrics {
        lock(&self.shared.metrics).clone()
    }

    /// Reset the cumulative metrics
    pub fn reset_metrics(&self) {
        lock(&self.shared.metrics).reset();
    }

    fn wait_while_stopping<'a>(
        &self,
        lifecycle: MutexGuard<'a, Lifecycle>,
    ) -> MutexGuard<'a, Lifecycle> {
        self.lifecycle_changed
            .wait_while(lifecycle, |l| matches!(l, Lifecycle::StopRequested))
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Spawn the worker thread
    ///
    /// Does nothing if the sweeper is already running. If another thread is
    /// in the middle of [`LogSweeper::stop`], waits for it to finish and then
    /// starts a fresh worker.
    ///
    /// # Errors
    ///
    /// Returns [`SweeperError::Spawn`] if the OS refuses to create the thread.
    pub fn start(&self) -> Result<(), SweeperError> {
        let mut lifecycle = self.wait_while_stopping(lock(&self.lifecycle));

        if let Lifecycle::Running(_) = *lifecycle {
            tracing::debug!("Log sweeper already running");
            return Ok(());
        }

        *lock(&self.shared.cancelled) = false;

        let shared = Arc::clone(&self.shared);
        let handle = thread::Builder::new()
            .name("logsweeper".to_string())
            .spawn(move || shared.run())
            .map_err(SweeperError::Spawn)?;
        *lifecycle = Lifecycle::Running(handle);

        let config = self.shared.config.snapshot();
        tracing::info!(
            directory = %config.directory.display(),
            interval = ?config.interval,
            retention_limit = config.retention_limit,
            dry_run = config.dry_run,
            "Log sweeper started"
        );

        Ok(())
    }

    /// Cancel the worker and block until it has exited
    ///
    /// The worker is woken immediately if it is waiting between cycles; a
    /// cycle already in progress runs to completion first. Safe to call when
    /// idle and from several threads at once: every caller returns only after
    /// the worker has terminated.
    pub fn stop(&self) {
        let handle = {
            let mut lifecycle = self.wait_while_stopping(lock(&self.lifecycle));
            match mem::replace(&mut *lifecycle, Lifecycle::StopRequested) {
                Lifecycle::Running(handle) => handle,
                other => {
                    *lifecycle = other;
                    return;
                }
            }
        };

        *lock(&self.shared.cancelled) = true;
        self.shared.wake.notify_all();

        if handle.join().is_err() {
            tracing::error!("Log sweeper worker panicked");
        }

        *lock(&self.lifecycle) = Lifecycle::Idle;
        self.lifecycle_changed.notify_all();

        tracing::info!("Log sweeper stopped");
    }
}

impl<D> Drop for LogSweeper<D>
where
    D: DirectoryScanner + FileRemover + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}
