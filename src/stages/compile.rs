//! Compile stage - stylesheet source to plain CSS

use std::path::PathBuf;

use rsass::output::{Format, Style};

use crate::core::models::FileEntry;

use super::{Stage, StageError};

/// Compiles SCSS into expanded CSS and rewrites the extension to `css`
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileStage;

impl Stage for CompileStage {
    fn name(&self) -> &'static str {
        "compile"
    }

    fn apply(&self, entry: &mut FileEntry) -> Result<Option<PathBuf>, StageError> {
        let format = Format {
            style: Style::Expanded,
            ..Format::default()
        };
        let css = rsass::compile_scss(entry.contents.as_bytes(), format).map_err(|e| {
            StageError::Compile {
                path: entry.path.clone(),
                message: e.to_string(),
            }
        })?;
        entry.contents = String::from_utf8_lossy(&css).into_owned();
        entry.set_extension("css");
        Ok(None)
    }
}
