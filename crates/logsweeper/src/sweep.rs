//! One scan, categorize and enforce pass over a log directory

use crate::categorizer::categorize;
use crate::retention::{EnforcementOutcome, RetentionEnforcer};
use crate::SweepConfig;
use logsweeper_domain::{Category, DirectoryScanner, FileRemover};
use std::collections::HashMap;

/// What a single sweep cycle observed and did
///
/// Nothing in a report feeds into the next cycle; each cycle re-derives its
/// view of the directory from a fresh scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Regular files found by the scan
    pub scanned: usize,

    /// Files without any category marker
    pub unclassified: usize,

    /// Retention outcome per named category
    pub outcomes: HashMap<Category, EnforcementOutcome>,
}

impl SweepReport {
    /// Outcome for `category`, if it was enforced this cycle
    pub fn outcome(&self, category: Category) -> Option<&EnforcementOutcome> {
        self.outcomes.get(&category)
    }

    /// Files removed in `category`
    pub fn removed(&self, category: Category) -> usize {
        self.outcome(category).map_or(0, |o| o.removed.len())
    }

    /// Files removed across all categories
    pub fn total_removed(&self) -> usize {
        self.outcomes.values().map(|o| o.removed.len()).sum()
    }

    /// Failed removals across all categories
    pub fn total_failed(&self) -> usize {
        self.outcomes.values().map(|o| o.failed.len()).sum()
    }

    /// Files left in place across all named categories
    pub fn total_retained(&self) -> usize {
        self.outcomes.values().map(|o| o.retained).sum()
    }
}

/// Run one sweep cycle against `directory` using `config`
///
/// A directory that cannot be listed yields an empty scan and the cycle
/// completes without touching anything.
///
/// # Examples
///
/// ```no_run
/// use logsweeper::{sweep_once, FsDirectory, SweepConfig};
///
/// let config = SweepConfig::new("./log").with_retention_limit(5);
/// let report = sweep_once(&config, &FsDirectory);
/// println!("removed {} files", report.total_removed());
/// ```
pub fn sweep_once<D>(config: &SweepConfig, directory: &D) -> SweepReport
where
    D: DirectoryScanner + FileRemover + ?Sized,
{
    let records = directory.scan(&config.directory);
    let scanned = records.len();
    let groups = categorize(records);

    tracing::debug!(
        directory = %config.directory.display(),
        scanned,
        info = groups.info.len(),
        warning = groups.warning.len(),
        error = groups.error.len(),
        unclassified = groups.unclassified,
        "Scanned log directory"
    );

    let mut report = SweepReport {
        scanned,
        unclassified: groups.unclassified,
        outcomes: HashMap::new(),
    };

    let enforcer = RetentionEnforcer::from_config(config);
    for (category, files) in groups.into_groups() {
        let outcome = enforcer.enforce(category, files, directory);
        report.outcomes.insert(category, outcome);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryDirectory, ROOT};

    fn config(limit: usize) -> SweepConfig {
        SweepConfig::new(ROOT).with_retention_limit(limit)
    }

    #[test]
    fn test_full_sweep_cycle() {
        let dir = MemoryDirectory::new();
        for n in 1..=4 {
            dir.add(&format!("svc_INFO_{n}"), n);
            dir.add(&format!("svc_WARNING_{n}"), n);
            dir.add(&format!("svc_ERROR_{n}"), n);
            dir.add(&format!("svc_debug_{n}"), n);
        }

        let report = sweep_once(&config(2), &dir);

        assert_eq!(report.scanned, 16);
        assert_eq!(report.unclassified, 4);
        assert_eq!(report.total_removed(), 6);
        assert_eq!(report.total_retained(), 6);
        assert_eq!(report.total_failed(), 0);
        for category in Category::NAMED {
            assert_eq!(report.removed(category), 2);
        }
        assert_eq!(dir.names().len(), 10);
    }

    #[test]
    fn test_unclassified_files_survive() {
        let dir = MemoryDirectory::new();
        for n in 1..=5 {
            dir.add(&format!("trace_{n}.log"), n);
        }

        let report = sweep_once(&config(1), &dir);

        assert_eq!(report.unclassified, 5);
        assert_eq!(report.total_removed(), 0);
        assert!(dir.remove_attempts().is_empty());
    }

    #[test]
    fn test_below_limit_no_deletions() {
        let dir = MemoryDirectory::new();
        dir.add("x_ERROR.log", 1);
        dir.add("x_WARNING.log", 2);

        let report = sweep_once(&config(10), &dir);

        assert_eq!(report.total_removed(), 0);
        assert_eq!(dir.names(), vec!["x_ERROR.log", "x_WARNING.log"]);
    }

    #[test]
    fn test_other_directory_is_not_scanned() {
        let dir = MemoryDirectory::new();
        dir.add("a_INFO", 1);
        dir.add("b_INFO", 2);

        let report = sweep_once(&SweepConfig::new("/elsewhere").with_retention_limit(1), &dir);

        assert_eq!(report.scanned, 0);
        assert_eq!(dir.names().len(), 2);
    }

    #[test]
    fn test_failures_in_one_category_do_not_block_others() {
        let dir = MemoryDirectory::new();
        dir.add("a_INFO_1", 1);
        dir.add("a_INFO_2", 2);
        dir.add("a_ERROR_1", 1);
        dir.add("a_ERROR_2", 2);
        dir.fail_removal("a_INFO_1");

        let report = sweep_once(&config(1), &dir);

        assert_eq!(report.total_failed(), 1);
        assert_eq!(report.removed(Category::Error), 1);
        assert_eq!(dir.names(), vec!["a_ERROR_2", "a_INFO_1", "a_INFO_2"]);
    }
}
