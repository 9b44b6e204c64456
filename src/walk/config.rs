//! Configuration for the search walker

use super::prune::PruneSet;

/// Configuration for a file-name search.
///
/// Resolved once from the command line and passed to the walker; the same
/// configuration is reused across every search root.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Exact file name to look for in each directory.
    pub file_name: String,
    /// Keep descending into a directory after a match has been found there.
    pub deep: bool,
    /// Follow symbolic links to directories instead of treating them as leaves.
    pub follow_links: bool,
    /// Directories to exclude from the walk.
    pub prune: PruneSet,
}

impl WalkConfig {
    /// Create a configuration for `file_name` with all flags off and an
    /// empty prune set.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            deep: false,
            follow_links: false,
            prune: PruneSet::default(),
        }
    }
}
