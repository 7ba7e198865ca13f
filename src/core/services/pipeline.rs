//! Pipeline execution - drives file entries through the stage sequence
//!
//! Entries are processed strictly sequentially: each file flows through
//! every stage in declared order before the next file starts, and the run
//! only completes once every entry has cleared every stage.

use std::path::{Path, PathBuf};

use crate::core::models::PipelineSpec;
use crate::core::services::runner::RunnerError;
use crate::core::services::sources;
use crate::stages;

/// Outcome of one pipeline execution
#[derive(Debug, Clone, Default)]
pub struct PipelineRun {
    /// Number of files fed into the pipeline
    pub files: usize,

    /// Paths written by dest stages, in write order
    pub outputs: Vec<PathBuf>,
}

/// Run a declared pipeline to completion
///
/// A stage failure aborts the run immediately; entries already written by
/// earlier iterations are left in place.
pub fn execute(root: &Path, spec: &PipelineSpec) -> Result<PipelineRun, RunnerError> {
    let entries = sources::collect(root, &spec.src)?;
    let stages = stages::build(root, &spec.stages)?;

    let files = entries.len();
    if files == 0 {
        log::info!("no files matched `{}`", spec.src);
        return Ok(PipelineRun::default());
    }

    let mut outputs = Vec::new();
    for mut entry in entries {
        for stage in &stages {
            if let Some(written) = stage.apply(&mut entry)? {
                log::debug!("{}: wrote {}", stage.name(), written.display());
                outputs.push(written);
            }
        }
    }

    Ok(PipelineRun { files, outputs })
}
