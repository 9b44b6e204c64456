//! SearchWalker - depth-first search for directories containing a file

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WalkError;

use super::config::WalkConfig;

/// Depth-first walker that records every directory directly containing a
/// file named exactly the configured target.
///
/// The walk is single-threaded and synchronous. Unreadable directories are
/// fatal; the caller receives no partial results.
pub struct SearchWalker {
    config: WalkConfig,
}

impl SearchWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walk `root`, appending matched directory paths to `out`.
    ///
    /// `root` should be absolute; result paths are built from it. A root
    /// present in the prune set (compared by path) is skipped entirely.
    pub fn walk(&self, root: &Path, out: &mut Vec<PathBuf>) -> Result<(), WalkError> {
        if self.config.prune.is_pruned_path(root) {
            return Ok(());
        }
        self.walk_dir(root, out)
    }

    fn walk_dir(&self, dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), WalkError> {
        let read_err = |source| WalkError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut subdirs = Vec::new();
        let mut found = false;
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            if path.is_dir() {
                subdirs.push(path);
            } else if entry.file_name().as_os_str() == OsStr::new(&self.config.file_name) {
                // Regular files, symlinks to files, and broken symlinks all
                // participate in the name match; directories never do.
                found = true;
            }
        }

        if found {
            out.push(dir.to_path_buf());
            // Once a match has been found in a directory, don't go deeper
            // unless told otherwise.
            if !self.config.deep {
                return Ok(());
            }
        }

        subdirs.sort();
        for sub in subdirs {
            let name = sub
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            if self.config.prune.should_prune(&sub, &name) {
                continue;
            }
            // Symlinked directories are leaves unless links are followed.
            if sub.is_symlink() && !self.config.follow_links {
                continue;
            }
            self.walk_dir(&sub, out)?;
        }

        Ok(())
    }
}
