//! A file entry flowing through a pipeline

use std::path::PathBuf;

/// One file moving through the stage sequence
///
/// The path is relative to the base of the pipeline's source glob. Stages
/// mutate the entry in place; the entry produced by stage N is the sole
/// input to stage N+1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the source base (usually just the file name)
    pub path: PathBuf,

    /// Current contents
    pub contents: String,
}

impl FileEntry {
    /// Create an entry
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Replace the path's extension
    pub fn set_extension(&mut self, extension: &str) {
        self.path.set_extension(extension);
    }
}
