//! Partitioning of scanned files into severity groups

use logsweeper_domain::{Category, FileRecord};

/// Files of one scan, grouped by [`Category`]
///
/// Unclassified files are only counted; they never reach retention.
#[derive(Debug, Clone, Default)]
pub struct CategorizedFiles {
    /// Files carrying the `INFO` marker
    pub info: Vec<FileRecord>,

    /// Files carrying the `WARNING` marker (and not `INFO`)
    pub warning: Vec<FileRecord>,

    /// Files carrying the `ERROR` marker (and neither of the others)
    pub error: Vec<FileRecord>,

    /// Number of files without any marker
    pub unclassified: usize,
}

impl CategorizedFiles {
    /// Files in a named category; empty for [`Category::Unclassified`]
    pub fn files(&self, category: Category) -> &[FileRecord] {
        match category {
            Category::Info => &self.info,
            Category::Warning => &self.warning,
            Category::Error => &self.error,
            Category::Unclassified => &[],
        }
    }

    /// Total number of files in named categories
    pub fn classified_len(&self) -> usize {
        self.info.len() + self.warning.len() + self.error.len()
    }

    /// Consume into one group per named category, in marker priority order
    pub fn into_groups(self) -> [(Category, Vec<FileRecord>); 3] {
        [
            (Category::Info, self.info),
            (Category::Warning, self.warning),
            (Category::Error, self.error),
        ]
    }
}

/// Group `records` by the marker found in each file name
pub fn categorize(records: impl IntoIterator<Item = FileRecord>) -> CategorizedFiles {
    let mut groups = CategorizedFiles::default();

    for record in records {
        match record.category() {
            Category::Info => groups.info.push(record),
            Category::Warning => groups.warning.push(record),
            Category::Error => groups.error.push(record),
            Category::Unclassified => groups.unclassified += 1,
        }
    }

    groups
}
