//! Count-based retention for one category of log files

use crate::SweepConfig;
use logsweeper_domain::{Category, FileRecord, FileRemover};
use std::path::PathBuf;

/// Result of enforcing retention on one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnforcementOutcome {
    /// Files left in place
    pub retained: usize,

    /// Files successfully removed
    pub removed: Vec<PathBuf>,

    /// Files whose removal failed
    pub failed: Vec<PathBuf>,

    /// Files that would have been removed outside dry-run mode
    pub dry_run: Vec<PathBuf>,
}

/// Keeps the newest `limit` files of a category and removes the rest
///
/// A limit of zero disables retention entirely. Every excess file is
/// attempted exactly once; a failed removal is logged and recorded but never
/// stops the remaining ones.
///
/// # Examples
///
/// ```
/// use logsweeper::RetentionEnforcer;
///
/// let enforcer = RetentionEnforcer::new(5);
/// assert_eq!(enforcer.limit(), 5);
/// assert!(RetentionEnforcer::new(0).is_unlimited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionEnforcer {
    limit: usize,
    dry_run: bool,
}

impl RetentionEnforcer {
    /// Create an enforcer keeping `limit` files per category
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            dry_run: false,
        }
    }

    /// Create an enforcer from a configuration snapshot
    pub fn from_config(config: &SweepConfig) -> Self {
        Self::new(config.retention_limit).with_dry_run(config.dry_run)
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Configured limit
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether this enforcer never removes anything
    pub fn is_unlimited(&self) -> bool {
        self.limit == 0
    }

    /// Apply retention to the files of `category`
    pub fn enforce<R>(
        &self,
        category: Category,
        mut files: Vec<FileRecord>,
        remover: &R,
    ) -> EnforcementOutcome
    where
        R: FileRemover + ?Sized,
    {
        let mut outcome = EnforcementOutcome::default();

        if self.is_unlimited() || files.len() <= self.limit {
            outcome.retained = files.len();
            return outcome;
        }

        sort_newest_first(&mut files);
        let excess = files.split_off(self.limit);
        outcome.retained = files.len();

        if self.dry_run {
            tracing::info!(
                "DRY RUN: Would remove {} {} log files beyond limit {}",
                excess.len(),
                category,
                self.limit
            );
            outcome.dry_run = excess.into_iter().map(|record| record.path).collect();
            return outcome;
        }

        for record in excess {
            match remover.remove_file(&record.path) {
                Ok(()) => {
                    tracing::info!(category = %category, path = %record.path.display(), "Removed log file");
                    outcome.removed.push(record.path);
                }
                Err(e) => {
                    tracing::error!(
                        category = %category,
                        path = %record.path.display(),
                        error = %e,
                        "Failed to remove log file"
                    );
                    outcome.failed.push(record.path);
                }
            }
        }

        outcome
    }
}

/// Sort most recently modified first
///
/// The sort is stable, so files with identical timestamps keep their
/// relative input order.
pub fn sort_newest_first(files: &mut [FileRecord]) {
    files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryDirectory;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::time::{Duration, SystemTime};

    fn info_files(dir: &MemoryDirectory, count: u64) -> Vec<FileRecord> {
        for n in 1..=count {
            dir.add(&format!("app_INFO_{n}"), n * 1_000);
        }
        dir.scan_all()
    }

    #[test]
    fn test_keeps_newest_files() {
        let dir = MemoryDirectory::new();
        let files = info_files(&dir, 7);

        let outcome = RetentionEnforcer::new(5).enforce(Category::Info, files, &dir);

        assert_eq!(outcome.retained, 5);
        assert_eq!(
            outcome.removed,
            vec![
                MemoryDirectory::path("app_INFO_2"),
                MemoryDirectory::path("app_INFO_1"),
            ]
        );
        assert!(outcome.failed.is_empty());
        assert_eq!(dir.names().len(), 5);
        assert!(!dir.names().contains(&"app_INFO_1".to_string()));
    }

    #[test]
    fn test_zero_limit_never_removes() {
        let dir = MemoryDirectory::new();
        let files = info_files(&dir, 50);

        let outcome = RetentionEnforcer::new(0).enforce(Category::Info, files, &dir);

        assert_eq!(outcome.retained, 50);
        assert!(outcome.removed.is_empty());
        assert!(dir.remove_attempts().is_empty());
    }

    #[test]
    fn test_within_limit_is_untouched() {
        let dir = MemoryDirectory::new();
        let files = info_files(&dir, 3);

        let outcome = RetentionEnforcer::new(3).enforce(Category::Info, files, &dir);

        assert_eq!(outcome.retained, 3);
        assert!(dir.remove_attempts().is_empty());
    }

    #[test]
    fn test_failure_does_not_abort_siblings() {
        let dir = MemoryDirectory::new();
        let files = info_files(&dir, 6);
        dir.fail_removal("app_INFO_2");

        let outcome = RetentionEnforcer::new(2).enforce(Category::Info, files, &dir);

        assert_eq!(outcome.failed, vec![MemoryDirectory::path("app_INFO_2")]);
        assert_eq!(outcome.removed.len(), 3);
        assert_eq!(dir.remove_attempts().len(), 4);
        assert_eq!(dir.names(), vec!["app_INFO_2", "app_INFO_5", "app_INFO_6"]);
    }

    #[test]
    fn test_vanished_file_is_reported_once() {
        let dir = MemoryDirectory::new();
        let mut files = info_files(&dir, 2);
        files.push(FileRecord::new(
            MemoryDirectory::path("ghost_INFO"),
            SystemTime::UNIX_EPOCH,
        ));

        let outcome = RetentionEnforcer::new(2).enforce(Category::Info, files, &dir);

        assert_eq!(outcome.failed, vec![MemoryDirectory::path("ghost_INFO")]);
        assert_eq!(dir.remove_attempts().len(), 1);
    }

    #[test]
    fn test_dry_run_removes_nothing() {
        let dir = MemoryDirectory::new();
        let files = info_files(&dir, 4);

        let outcome = RetentionEnforcer::new(1)
            .with_dry_run(true)
            .enforce(Category::Info, files, &dir);

        assert_eq!(outcome.retained, 1);
        assert_eq!(outcome.dry_run.len(), 3);
        assert!(outcome.removed.is_empty());
        assert!(dir.remove_attempts().is_empty());
        assert_eq!(dir.names().len(), 4);
    }

    #[test]
    fn test_sort_uses_sub_second_precision() {
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mut files = vec![
            FileRecord::new("/l/a", base + Duration::from_nanos(1)),
            FileRecord::new("/l/b", base + Duration::from_nanos(3)),
            FileRecord::new("/l/c", base),
        ];

        sort_newest_first(&mut files);

        let order: Vec<_> = files.iter().map(|f| f.file_name().into_owned()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_config() {
        let config = SweepConfig::default().with_retention_limit(4).with_dry_run(true);
        let enforcer = RetentionEnforcer::from_config(&config);
        assert_eq!(enforcer, RetentionEnforcer::new(4).with_dry_run(true));
    }

    proptest! {
        #[test]
        fn keeps_exactly_the_newest(
            stamps in proptest::collection::btree_set(0u64..1_000_000, 0..40),
            limit in 1usize..20,
        ) {
            let dir = MemoryDirectory::new();
            for stamp in &stamps {
                dir.add(&format!("f_ERROR_{stamp}"), *stamp);
            }

            let outcome = RetentionEnforcer::new(limit).enforce(Category::Error, dir.scan_all(), &dir);

            let expected: BTreeSet<String> = stamps
                .iter()
                .rev()
                .take(limit)
                .map(|stamp| format!("f_ERROR_{stamp}"))
                .collect();
            let remaining: BTreeSet<String> = dir.names().into_iter().collect();

            prop_assert_eq!(outcome.retained, stamps.len().min(limit));
            prop_assert_eq!(remaining, expected);
        }
    }
}
