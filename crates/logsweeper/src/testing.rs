//! In-memory directory used by the unit tests

use logsweeper_domain::{DirectoryScanner, FileRecord, FileRemover};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread::{self, ThreadId};
use std::time::{Duration, SystemTime};

pub(crate) const ROOT: &str = "/logs";

/// Fake log directory with failure injection
#[derive(Default)]
pub(crate) struct MemoryDirectory {
    files: Mutex<BTreeMap<PathBuf, SystemTime>>,
    failing: Mutex<HashSet<PathBuf>>,
    scan_threads: Mutex<Vec<ThreadId>>,
    remove_attempts: Mutex<Vec<PathBuf>>,
    panicking_scans: AtomicUsize,
    scan_delay: Mutex<Duration>,
}

impl MemoryDirectory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn path(name: &str) -> PathBuf {
        Path::new(ROOT).join(name)
    }

    /// Add `name` under [`ROOT`] modified `nanos` after the epoch
    pub(crate) fn add(&self, name: &str, nanos: u64) {
        self.files.lock().unwrap().insert(
            Self::path(name),
            SystemTime::UNIX_EPOCH + Duration::from_nanos(nanos),
        );
    }

    pub(crate) fn fail_removal(&self, name: &str) {
        self.failing.lock().unwrap().insert(Self::path(name));
    }

    pub(crate) fn panic_next_scans(&self, count: usize) {
        self.panicking_scans.store(count, Ordering::SeqCst);
    }

    pub(crate) fn set_scan_delay(&self, delay: Duration) {
        *self.scan_delay.lock().unwrap() = delay;
    }

    /// Remaining file names, sorted
    pub(crate) fn names(&self) -> Vec<String> {
        self.files
            .lock()
            .unwrap()
            .keys()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }

    /// Scan [`ROOT`] without going through a sweep
    pub(crate) fn scan_all(&self) -> Vec<FileRecord> {
        self.scan(Path::new(ROOT))
    }

    pub(crate) fn scan_threads(&self) -> Vec<ThreadId> {
        self.scan_threads.lock().unwrap().clone()
    }

    pub(crate) fn scan_count(&self) -> usize {
        self.scan_threads.lock().unwrap().len()
    }

    pub(crate) fn remove_attempts(&self) -> Vec<PathBuf> {
        self.remove_attempts.lock().unwrap().clone()
    }
}

impl DirectoryScanner for MemoryDirectory {
    fn scan(&self, directory: &Path) -> Vec<FileRecord> {
        self.scan_threads.lock().unwrap().push(thread::current().id());

        let remaining = self.panicking_scans.load(Ordering::SeqCst);
        if remaining > 0 {
            self.panicking_scans.store(remaining - 1, Ordering::SeqCst);
            panic!("injected scan failure");
        }

        let delay = *self.scan_delay.lock().unwrap();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        self.files
            .lock()
            .unwrap()
            .iter()
            .filter(|(path, _)| path.parent() == Some(directory))
            .map(|(path, modified)| FileRecord::new(path.clone(), *modified))
            .collect()
    }
}

impl FileRemover for MemoryDirectory {
    type Error = String;

    fn remove_file(&self, path: &Path) -> Result<(), Self::Error> {
        self.remove_attempts.lock().unwrap().push(path.to_path_buf());

        if self.failing.lock().unwrap().contains(path) {
            return Err("Permission denied".to_string());
        }

        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| "No such file or directory".to_string())
    }
}
