//! Shared path helpers for the walker

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path to absolute, canonical form.
///
/// Paths that do not exist cannot be canonicalized; they fall back to a
/// lexical absolute form so prune entries may name directories that are
/// absent on this machine.
pub fn resolve_path(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
