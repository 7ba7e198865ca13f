//! Centralized path definitions for suds
//!
//! ## Project layout
//!
//! ```text
//! project/
//! ├── suds.toml          # Task declarations (optional; built-in used otherwise)
//! ├── css/               # Stylesheet sources (stock declaration)
//! │   └── *.scss
//! └── www/css/           # Compiled output (stock declaration)
//! ```
//!
//! Nothing persists between runs except the files the dest stages write.

use std::path::{Path, PathBuf};

/// Project manifest filename
pub const MANIFEST_FILE: &str = "suds.toml";

/// Manifest location for a project root
#[must_use]
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}
