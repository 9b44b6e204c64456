//! Prune set resolution and matching

use std::path::{Path, PathBuf};

use glob::Pattern;

use super::utils::resolve_path;

/// Directories excluded from the walk.
///
/// Raw `--prune` values come in two forms: entries containing a path
/// separator name a specific directory and are resolved to absolute form up
/// front; bare entries match subdirectory names anywhere in the tree, either
/// exactly or as a glob pattern.
#[derive(Debug, Clone, Default)]
pub struct PruneSet {
    names: Vec<String>,
    paths: Vec<PathBuf>,
}

impl PruneSet {
    /// Build a prune set from raw `--prune` values.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            if entry.chars().any(std::path::is_separator) {
                paths.push(resolve_path(Path::new(entry)));
            } else {
                names.push(entry.to_string());
            }
        }
        Self { names, paths }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.paths.is_empty()
    }

    /// Check whether a directory name matches a pruned name or glob pattern.
    pub fn is_pruned_name(&self, name: &str) -> bool {
        self.names
            .iter()
            .any(|n| n == name || glob_match(n, name))
    }

    /// Check whether an absolute path is pruned.
    pub fn is_pruned_path(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Check whether a subdirectory should be removed from the descend list.
    ///
    /// `path` must be the absolute path as built from the search root.
    pub fn should_prune(&self, path: &Path, name: &str) -> bool {
        self.is_pruned_name(name) || self.is_pruned_path(path)
    }
}

/// Match a glob pattern against a name.
fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
