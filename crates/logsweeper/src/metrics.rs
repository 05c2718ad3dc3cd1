//! Metrics collection for sweeper operations

use crate::SweepReport;
use logsweeper_domain::Category;
use std::collections::HashMap;
use std::time::Duration;

/// Cumulative metrics across sweep cycles
///
/// Tracks files removed per category, failed removals and cycle counts.
#[derive(Debug, Clone, Default)]
pub struct SweeperMetrics {
    /// Files removed per category
    pub removed: HashMap<Category, usize>,

    /// Removals that failed
    pub failed: usize,

    /// Sweep cycles completed
    pub sweep_count: usize,

    /// Sweep cycles cut short by an unexpected failure
    pub aborted_count: usize,

    /// Time spent inside sweep cycles
    pub total_runtime: Duration,
}

impl SweeperMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record file removals for a category
    pub fn record_removal(&mut self, category: Category, count: usize) {
        if count > 0 {
            *self.removed.entry(category).or_insert(0) += count;
        }
    }

    /// Fold a completed cycle into the totals
    pub fn record_sweep(&mut self, report: &SweepReport, elapsed: Duration) {
        for (category, outcome) in &report.outcomes {
            self.record_removal(*category, outcome.removed.len());
        }
        self.failed += report.total_failed();
        self.sweep_count += 1;
        self.total_runtime += elapsed;
    }

    /// Record a cycle aborted by an unexpected failure
    pub fn record_aborted(&mut self, elapsed: Duration) {
        self.aborted_count += 1;
        self.total_runtime += elapsed;
    }

    /// Get total files removed across all categories
    pub fn total_removed(&self) -> usize {
        self.removed.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Log Sweeper Metrics Summary".to_string(),
            "===========================".to_string(),
            format!("Sweep cycles: {}", self.sweep_count),
            format!("Aborted cycles: {}", self.aborted_count),
            format!("Total runtime: {:.3}s", self.total_runtime.as_secs_f64()),
            String::new(),
        ];

        if !self.removed.is_empty() {
            lines.push("Removals by category:".to_string());
            for category in Category::NAMED {
                if let Some(count) = self.removed.get(&category) {
                    lines.push(format!("  {}: {}", category, count));
                }
            }
            lines.push(format!("  Total: {}", self.total_removed()));
        }

        if self.failed > 0 {
            lines.push(format!("Failed removals: {}", self.failed));
        }

        lines.join("\n")
    }
}
