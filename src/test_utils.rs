//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Paths are relative to the root and may contain `/`. The tree is
/// automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add `count` sibling directories `<parent>/<stem>001`, `<stem>002`, ...
    pub fn add_numbered_dirs(&self, parent: &str, stem: &str, count: usize) -> Vec<PathBuf> {
        (1..=count)
            .map(|i| {
                let name = format!("{}{:03}", stem, i);
                if parent.is_empty() {
                    self.add_dir(&name)
                } else {
                    self.add_dir(&format!("{}/{}", parent, name))
                }
            })
            .collect()
    }

    /// Add a Python virtual environment marked by `pyvenv.cfg`.
    pub fn add_venv(&self, path: &str) -> PathBuf {
        self.add_file(&format!("{}/pyvenv.cfg", path), "home = /usr/bin\n");
        self.add_file(&format!("{}/lib/site.py", path), "");
        self.dir.path().join(path)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
