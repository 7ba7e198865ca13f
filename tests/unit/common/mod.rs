//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing suds components.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A simple SCSS source with one variable to resolve
pub const SIMPLE_SCSS: &str = "$accent: #3bbfce;\n\nbody {\n  color: $accent;\n}\n";

/// An SCSS source carrying a special comment that survives compression
pub const BANNER_SCSS: &str = "/*! banner: keep me */\nbody {\n  margin: 0;\n}\n";

/// An SCSS source that fails to compile (unclosed block)
pub const BROKEN_SCSS: &str = "body { color: red;\n";

/// A test project with the stock stylesheet layout
///
/// ```text
/// /
/// └── css/        # stylesheet sources
/// ```
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a new project with an empty `css/` source directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("css")).unwrap();
        Self { dir }
    }

    /// Get the root path of the test project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file to the test project
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Read a file from the test project
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    /// Check whether a file exists in the test project
    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }
}
