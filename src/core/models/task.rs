//! Task model
//!
//! A task is a named, runnable unit. Tasks can depend on other tasks,
//! forming a directed acyclic graph the runner walks in dependency order.

use super::stage::StageConfig;

/// A task - a named unit with optional prerequisites and an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique task name
    pub name: String,

    /// Tasks that must run before this one
    pub deps: Vec<String>,

    /// What the task does once its prerequisites have run
    pub action: TaskAction,
}

/// The executable part of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Nothing beyond running prerequisites (an entry-point alias)
    NoOp,

    /// Stream matching files through a stage pipeline
    Pipeline(PipelineSpec),
}

/// A declared pipeline: source glob plus ordered stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSpec {
    /// Glob selecting input files, relative to the project root
    pub src: String,

    /// Stages applied to every matched file, in declared order
    pub stages: Vec<StageConfig>,
}

impl Task {
    /// An alias task: prerequisites only, no action of its own
    #[must_use]
    pub fn alias(name: impl Into<String>, deps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            deps,
            action: TaskAction::NoOp,
        }
    }

    /// A pipeline task with no prerequisites
    #[must_use]
    pub fn pipeline(name: impl Into<String>, spec: PipelineSpec) -> Self {
        Self {
            name: name.into(),
            deps: Vec::new(),
            action: TaskAction::Pipeline(spec),
        }
    }

    /// Whether this task performs no work of its own
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self.action, TaskAction::NoOp)
    }
}
