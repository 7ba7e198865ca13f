//! Dest stage - writes the entry to an output directory

use std::fs;
use std::path::PathBuf;

use crate::core::models::FileEntry;

use super::{Stage, StageError};

/// Writes the entry's current contents under a directory
///
/// The directory (and any parents) is created on demand. The entry itself
/// continues down the pipeline unchanged.
#[derive(Debug, Clone)]
pub struct DestStage {
    dir: PathBuf,
}

impl DestStage {
    /// Create a dest stage targeting a directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Stage for DestStage {
    fn name(&self) -> &'static str {
        "dest"
    }

    fn apply(&self, entry: &mut FileEntry) -> Result<Option<PathBuf>, StageError> {
        let path = self.dir.join(&entry.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StageError::Write {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, &entry.contents).map_err(|source| StageError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }
}
