//! Minify stage - compressed CSS output
//!
//! Minification is delegated to the compiler's compressed output style
//! (plain CSS is valid SCSS). Compression already drops ordinary comments;
//! `/*! ... */` comments survive it, so when the stage is configured to
//! strip them they are removed before recompression.

use std::path::PathBuf;

use regex::Regex;
use rsass::output::{Format, Style};

use crate::core::models::FileEntry;

use super::{Stage, StageError};

const SPECIAL_COMMENT: &str = r"(?s)/\*!.*?\*/";

/// Recompresses CSS, optionally dropping `/*! ... */` comments
#[derive(Debug, Clone)]
pub struct MinifyStage {
    strip_special_comments: bool,
    special_comment: Regex,
}

impl MinifyStage {
    /// Create a minify stage
    pub fn new(strip_special_comments: bool) -> Result<Self, StageError> {
        Ok(Self {
            strip_special_comments,
            special_comment: Regex::new(SPECIAL_COMMENT)?,
        })
    }
}

impl Stage for MinifyStage {
    fn name(&self) -> &'static str {
        "minify"
    }

    fn apply(&self, entry: &mut FileEntry) -> Result<Option<PathBuf>, StageError> {
        let source = if self.strip_special_comments {
            self.special_comment
                .replace_all(&entry.contents, "")
                .into_owned()
        } else {
            entry.contents.clone()
        };

        let format = Format {
            style: Style::Compressed,
            ..Format::default()
        };
        let css =
            rsass::compile_scss(source.as_bytes(), format).map_err(|e| StageError::Minify {
                path: entry.path.clone(),
                message: e.to_string(),
            })?;
        entry.contents = String::from_utf8_lossy(&css).into_owned();
        Ok(None)
    }
}
