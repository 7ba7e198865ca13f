//! Rename stage - rewrites the entry's file extension

use std::path::PathBuf;

use crate::core::models::FileEntry;

use super::{Stage, StageError};

/// Replaces the entry's extension with a configured marker
///
/// `style.css` renamed with `min.css` becomes `style.min.css`.
#[derive(Debug, Clone)]
pub struct RenameStage {
    extension: String,
}

impl RenameStage {
    /// Create a rename stage; a leading dot on the extension is accepted
    #[must_use]
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }
}

impl Stage for RenameStage {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn apply(&self, entry: &mut FileEntry) -> Result<Option<PathBuf>, StageError> {
        entry.set_extension(&self.extension);
        Ok(None)
    }
}
