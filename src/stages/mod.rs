//! Transform stages
//!
//! A stage is one transform in a build pipeline. Stages mutate a
//! [`FileEntry`] in place; stages with filesystem effects report the path
//! they wrote. [`build`] turns a declaration list into the executable
//! stage sequence.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{FileEntry, StageConfig};

mod compile;
mod dest;
mod minify;
mod rename;

pub use compile::CompileStage;
pub use dest::DestStage;
pub use minify::MinifyStage;
pub use rename::RenameStage;

/// Errors that can occur inside a pipeline stage
#[derive(Debug, Error)]
pub enum StageError {
    /// The stylesheet source failed to compile
    #[error("failed to compile {}: {message}", path.display())]
    Compile {
        /// Entry path at the time of failure
        path: PathBuf,
        /// Message reported by the compiler
        message: String,
    },

    /// The compiled CSS failed to minify
    #[error("failed to minify {}: {message}", path.display())]
    Minify {
        /// Entry path at the time of failure
        path: PathBuf,
        /// Message reported by the compiler
        message: String,
    },

    /// An output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A stage declaration carried an invalid option
    #[error("invalid stage configuration: {0}")]
    Config(#[from] regex::Error),
}

/// One transform step in a build pipeline
pub trait Stage {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Apply the transform to the entry in place
    ///
    /// Returns the path written, for stages with filesystem effects.
    fn apply(&self, entry: &mut FileEntry) -> Result<Option<PathBuf>, StageError>;
}

/// Build the executable stage sequence for a declaration list
///
/// Dest directories are resolved against the project root here, so the
/// stages themselves carry absolute targets.
pub fn build(root: &Path, configs: &[StageConfig]) -> Result<Vec<Box<dyn Stage>>, StageError> {
    let mut stages: Vec<Box<dyn Stage>> = Vec::with_capacity(configs.len());
    for config in configs {
        let stage: Box<dyn Stage> = match config {
            StageConfig::Compile => Box::new(CompileStage),
            StageConfig::Dest { dir } => Box::new(DestStage::new(root.join(dir))),
            StageConfig::Minify {
                strip_special_comments,
            } => Box::new(MinifyStage::new(*strip_special_comments)?),
            StageConfig::Rename { extension } => Box::new(RenameStage::new(extension.clone())),
        };
        stages.push(stage);
    }
    Ok(stages)
}
