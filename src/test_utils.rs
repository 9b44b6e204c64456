//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Provides methods for creating files, directories, and symlinks beneath a
/// canonicalized temporary root. The tree is removed when dropped.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create a new empty temporary tree.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// Canonical path of the tree root.
    pub fn root(&self) -> PathBuf {
        self.root.clone()
    }

    /// Borrowed path of the tree root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file at `path` relative to the root, creating parent
    /// directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory at `path` relative to the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `link` pointing at `original`, both relative to the
    /// root. The link target is written as an absolute path.
    #[cfg(unix)]
    pub fn add_symlink(&self, original: &str, link: &str) -> PathBuf {
        let link_path = self.root.join(link);
        if let Some(parent) = link_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(self.root.join(original), &link_path)
            .expect("Failed to create symlink");
        link_path
    }

    /// Build a uniform tree: `width` directories per level, `depth` levels,
    /// each leaf directory containing one file named `file_name`.
    pub fn populate(&self, width: usize, depth: usize, file_name: &str) {
        fn fill(dir: &Path, width: usize, depth: usize, file_name: &str) {
            if depth == 0 {
                fs::write(dir.join(file_name), "").expect("Failed to write file");
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("d{i}"));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, file_name);
            }
        }
        fill(&self.root, width, depth, file_name);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
