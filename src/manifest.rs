//! Project manifest (`suds.toml`)
//!
//! The manifest declares the named tasks a project can run. A task either
//! lists prerequisite tasks in `deps`, or drives a pipeline: every file
//! matching `src` flows through the declared stages in order. When no
//! manifest exists, the built-in declaration (compile, fan out, minify,
//! rename) is used.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{PipelineSpec, StageConfig, Task, TaskAction};
use crate::paths;

/// Name of the task run when the CLI is invoked bare
pub const DEFAULT_TASK: &str = "default";

/// Starter manifest written by `suds init`
///
/// Kept in sync with [`Manifest::default`]; a unit test pins the two
/// together.
pub const MANIFEST_TEMPLATE: &str = r#"# suds build manifest
#
# Each [tasks.<name>] entry declares a runnable task. A task either lists
# prerequisite tasks in `deps`, or drives a pipeline: every file matching
# `src` flows through the declared stages in order.

[tasks.default]
deps = ["styles"]

[tasks.styles]
src = "css/*.scss"

# Compile SCSS into plain CSS.
[[tasks.styles.stages]]
kind = "compile"

# Write the compiled stylesheet.
[[tasks.styles.stages]]
kind = "dest"
dir = "www/css"

# Minify, dropping /*! ... */ comments too.
[[tasks.styles.stages]]
kind = "minify"
strip_special_comments = true

# Mark the minified copy.
[[tasks.styles.stages]]
kind = "rename"
extension = "min.css"

# Write the minified stylesheet next to the sources.
[[tasks.styles.stages]]
kind = "dest"
dir = "css"
"#;

/// Errors that can occur while loading or validating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Manifest location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not a valid declaration
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Manifest location
        path: PathBuf,
        /// Underlying TOML failure
        #[source]
        source: toml::de::Error,
    },

    /// A task declares stages but no source glob
    #[error("task `{0}` declares stages but no src glob")]
    MissingSrc(String),

    /// A task declares a source glob but no stages
    #[error("task `{0}` declares a src glob but no stages")]
    MissingStages(String),
}

/// The parsed manifest: task name to declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Declared tasks
    #[serde(default)]
    pub tasks: BTreeMap<String, TaskConfig>,
}

/// A single task declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Names of tasks that must run first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deps: Vec<String>,

    /// Source glob feeding the pipeline, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Ordered stage declarations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<StageConfig>,
}

impl Default for Manifest {
    /// The built-in declaration used when no `suds.toml` exists
    fn default() -> Self {
        let styles = TaskConfig {
            deps: Vec::new(),
            src: Some("css/*.scss".to_string()),
            stages: vec![
                StageConfig::Compile,
                StageConfig::Dest {
                    dir: PathBuf::from("www/css"),
                },
                StageConfig::Minify {
                    strip_special_comments: true,
                },
                StageConfig::Rename {
                    extension: "min.css".to_string(),
                },
                StageConfig::Dest {
                    dir: PathBuf::from("css"),
                },
            ],
        };
        let default = TaskConfig {
            deps: vec!["styles".to_string()],
            ..TaskConfig::default()
        };

        let mut tasks = BTreeMap::new();
        tasks.insert("styles".to_string(), styles);
        tasks.insert(DEFAULT_TASK.to_string(), default);
        Self { tasks }
    }
}

impl Manifest {
    /// Load the manifest for a project root
    ///
    /// Falls back to the built-in declaration when no `suds.toml` exists;
    /// a manifest that exists but fails to parse is a hard error.
    pub fn load(root: &Path) -> Result<Self, ManifestError> {
        let path = paths::manifest_path(root);
        if !path.exists() {
            log::debug!(
                "no {} found, using the built-in declaration",
                paths::MANIFEST_FILE
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ManifestError::Parse { path, source })
    }

    /// Validated conversion into the task model
    ///
    /// A task with stages but no `src` (or the reverse) is rejected.
    pub fn tasks(&self) -> Result<Vec<Task>, ManifestError> {
        let mut out = Vec::with_capacity(self.tasks.len());
        for (name, config) in &self.tasks {
            let action = match (&config.src, config.stages.is_empty()) {
                (Some(src), false) => TaskAction::Pipeline(PipelineSpec {
                    src: src.clone(),
                    stages: config.stages.clone(),
                }),
                (Some(_), true) => return Err(ManifestError::MissingStages(name.clone())),
                (None, false) => return Err(ManifestError::MissingSrc(name.clone())),
                (None, true) => TaskAction::NoOp,
            };
            out.push(Task {
                name: name.clone(),
                deps: config.deps.clone(),
                action,
            });
        }
        Ok(out)
    }
}
