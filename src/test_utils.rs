//! Test utilities for building directory fixtures.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A fixture directory tree under a temporary directory.
///
/// tempfile names its directories `.tmpXXXX`, which count as hidden, so the
/// tree lives one level down in a visible directory of the caller's choosing.
/// Everything is removed when dropped.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty root directory called `root_name`.
    pub fn new(root_name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(root_name);
        fs::create_dir_all(&root).expect("Failed to create root dir");
        Self { _dir: dir, root }
    }

    /// The sample `myFolder` layout: mixed-case names, a hidden file and
    /// three levels of nesting.
    pub fn sample() -> Self {
        let tree = Self::new("myFolder");
        tree.add_file("Apple.txt", "");
        tree.add_file("banana.txt", "");
        tree.add_file("zebra.txt", "");
        tree.add_file(".hidden.txt", "");
        tree.add_file("Documents/README.md", "# Readme");
        tree.add_file("Documents/notes.txt", "notes");
        tree.add_file("Documents/images/cat.png", "");
        tree.add_file("Documents/images/Dog.png", "");
        tree
    }

    /// Path of the root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Root path as a command-line argument.
    pub fn arg(&self) -> String {
        self.root.to_string_lossy().to_string()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a balanced tree `depth` levels deep with `width` files and
    /// `width` subdirectories per level.
    pub fn add_balanced(&self, depth: usize, width: usize) {
        fn fill(dir: &Path, depth: usize, width: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("File_{}.txt", i)), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{}", i));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, width);
            }
        }
        fill(&self.root, depth, width);
    }
}
