//! Category module - severity classes derived from file names

use std::fmt;

/// Severity class of a log file
///
/// Derived from a literal, case-sensitive marker in the file name:
/// - Info: `"INFO"`
/// - Warning: `"WARNING"`
/// - Error: `"ERROR"`
/// - Unclassified: no marker, never touched by retention
///
/// Markers are tested in the order above and the first hit wins, so a name
/// carrying both `"INFO"` and `"ERROR"` is classified as [`Category::Info`].
/// Multiply-tagged names are unusual; the priority order is kept as documented
/// behavior rather than treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Informational logs
    Info,

    /// Warning logs
    Warning,

    /// Error logs
    Error,

    /// Files without any marker
    Unclassified,
}

impl Category {
    /// Categories subject to retention, in marker priority order
    pub const NAMED: [Category; 3] = [Category::Info, Category::Warning, Category::Error];

    /// Get the filename marker for this category
    ///
    /// Returns `None` for [`Category::Unclassified`].
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Category::Info => Some("INFO"),
            Category::Warning => Some("WARNING"),
            Category::Error => Some("ERROR"),
            Category::Unclassified => None,
        }
    }

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Unclassified => "unclassified",
        }
    }

    /// Classify a file name (not a path) by its markers
    ///
    /// # Examples
    ///
    /// ```
    /// use logsweeper_domain::Category;
    ///
    /// assert_eq!(Category::classify("app_ERROR_3.log"), Category::Error);
    /// assert_eq!(Category::classify("app_INFO_ERROR.log"), Category::Info);
    /// assert_eq!(Category::classify("app_info.log"), Category::Unclassified);
    /// ```
    pub fn classify(file_name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|category| {
                category
                    .marker()
                    .is_some_and(|marker| file_name.contains(marker))
            })
            .unwrap_or(Category::Unclassified)
    }

    /// Whether retention applies to this category
    pub fn is_named(&self) -> bool {
        !matches!(self, Category::Unclassified)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
