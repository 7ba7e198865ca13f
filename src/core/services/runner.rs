//! Task runner - topological execution of the task graph
//!
//! Tasks are nodes with a list of prerequisite names. Running a task runs
//! every prerequisite exactly once, prerequisites before dependents, then
//! the task's own action.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{Task, TaskAction};
use crate::core::services::pipeline;
use crate::core::services::sources::SourceError;
use crate::stages::StageError;

/// Errors that can occur while resolving or executing tasks
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A requested or referenced task does not exist
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// The dependency graph contains a cycle
    #[error("circular dependency involving task: {0}")]
    CircularDependency(String),

    /// Source expansion failed
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A pipeline stage failed
    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Record of one executed task
#[derive(Debug, Clone)]
pub struct TaskRun {
    /// Task name
    pub task: String,

    /// Files fed into the task's pipeline (0 for alias tasks)
    pub files: usize,

    /// Paths written by the task, in write order
    pub outputs: Vec<PathBuf>,
}

/// Executes tasks in dependency order
#[derive(Debug)]
pub struct Runner {
    root: PathBuf,
    tasks: HashMap<String, Task>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

impl Runner {
    /// Create a runner over a task set, rooted at a project directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, tasks: Vec<Task>) -> Self {
        let tasks = tasks.into_iter().map(|t| (t.name.clone(), t)).collect();
        Self {
            root: root.into(),
            tasks,
        }
    }

    /// The project root all pipeline paths are resolved against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run a task after all of its prerequisites
    ///
    /// Returns one record per executed task, in execution order.
    pub fn run(&self, name: &str) -> Result<Vec<TaskRun>, RunnerError> {
        let order = self.schedule(name)?;

        let mut runs = Vec::with_capacity(order.len());
        for task in order {
            log::info!("task `{}` starting", task.name);
            let run = match &task.action {
                TaskAction::NoOp => TaskRun {
                    task: task.name.clone(),
                    files: 0,
                    outputs: Vec::new(),
                },
                TaskAction::Pipeline(spec) => {
                    let outcome = pipeline::execute(&self.root, spec)?;
                    TaskRun {
                        task: task.name.clone(),
                        files: outcome.files,
                        outputs: outcome.outputs,
                    }
                },
            };
            log::info!(
                "task `{}` done ({} file(s), {} output(s))",
                run.task,
                run.files,
                run.outputs.len()
            );
            runs.push(run);
        }
        Ok(runs)
    }

    /// Resolve the execution order: prerequisites first, each task once
    fn schedule(&self, name: &str) -> Result<Vec<&Task>, RunnerError> {
        let mut marks = HashMap::new();
        let mut order = Vec::new();
        self.visit(name, &mut marks, &mut order)?;
        Ok(order)
    }

    fn visit<'a>(
        &'a self,
        name: &str,
        marks: &mut HashMap<&'a str, Mark>,
        order: &mut Vec<&'a Task>,
    ) -> Result<(), RunnerError> {
        match marks.get(name) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Visiting) => {
                return Err(RunnerError::CircularDependency(name.to_string()));
            },
            None => {},
        }

        let task = self
            .tasks
            .get(name)
            .ok_or_else(|| RunnerError::UnknownTask(name.to_string()))?;

        marks.insert(&task.name, Mark::Visiting);
        for dep in &task.deps {
            self.visit(dep, marks, order)?;
        }
        marks.insert(&task.name, Mark::Done);
        order.push(task);
        Ok(())
    }
}
