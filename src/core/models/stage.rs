//! Stage declarations
//!
//! A stage declaration is a flat mapping of recognized options, tagged by
//! `kind` in the manifest:
//!
//! ```toml
//! [[tasks.styles.stages]]
//! kind = "minify"
//! strip_special_comments = true
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One stage declaration in a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageConfig {
    /// Compile the stylesheet source into plain CSS
    Compile,

    /// Write the entry's current contents to a directory
    Dest {
        /// Output directory, relative to the project root
        dir: PathBuf,
    },

    /// Minify the CSS
    Minify {
        /// Drop `/*! ... */` comments as well
        #[serde(default = "default_strip")]
        strip_special_comments: bool,
    },

    /// Replace the entry's file extension
    Rename {
        /// Replacement extension, e.g. `min.css`
        extension: String,
    },
}

const fn default_strip() -> bool {
    true
}

impl std::fmt::Display for StageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile => write!(f, "compile"),
            Self::Dest { dir } => write!(f, "dest {}", dir.display()),
            Self::Minify {
                strip_special_comments: true,
            } => write!(f, "minify"),
            Self::Minify {
                strip_special_comments: false,
            } => write!(f, "minify (keep special comments)"),
            Self::Rename { extension } => write!(f, "rename {extension}"),
        }
    }
}
