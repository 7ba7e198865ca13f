//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Task, TaskAction};
use crate::core::services::runner::TaskRun;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a run operation
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Task requested on the command line
    pub task: String,
    /// Executed tasks, in execution order
    pub tasks: Vec<TaskSummary>,
    /// Total files fed through pipelines
    pub files: usize,
    /// Total output files written
    pub outputs: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u128,
    /// When the run completed (RFC3339)
    pub completed_at: String,
}

/// One executed task inside a run result
#[derive(Debug, Serialize)]
pub struct TaskSummary {
    /// Task name
    pub task: String,
    /// Files fed into the task's pipeline
    pub files: usize,
    /// Paths written by the task, in write order
    pub outputs: Vec<String>,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Declared tasks
    pub tasks: Vec<TaskInfo>,
}

/// Information about a declared task
#[derive(Debug, Serialize)]
pub struct TaskInfo {
    /// Task name
    pub name: String,
    /// Prerequisite tasks
    pub deps: Vec<String>,
    /// Source glob (absent for alias tasks)
    pub src: Option<String>,
    /// Stage chain, human-readable (empty for alias tasks)
    pub stages: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl RunResult {
    /// Build a result from the runner's execution records
    #[must_use]
    pub fn new(task: &str, runs: &[TaskRun], duration: Duration) -> Self {
        let tasks: Vec<TaskSummary> = runs
            .iter()
            .map(|run| TaskSummary {
                task: run.task.clone(),
                files: run.files,
                outputs: run
                    .outputs
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            })
            .collect();
        let files = tasks.iter().map(|t| t.files).sum();
        let outputs = tasks.iter().map(|t| t.outputs.len()).sum();

        Self {
            task: task.to_string(),
            tasks,
            files,
            outputs,
            duration_ms: duration.as_millis(),
            completed_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for summary in &self.tasks {
            if summary.outputs.is_empty() {
                println!("{} {}", "done".green().bold(), summary.task);
            } else {
                println!(
                    "{} {} ({} file(s))",
                    "done".green().bold(),
                    summary.task,
                    summary.files
                );
                for output in &summary.outputs {
                    println!("  wrote {output}");
                }
            }
        }
        println!(
            "\nFinished `{}` in {}ms ({} output(s))",
            self.task, self.duration_ms, self.outputs
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ListResult {
    /// Build a listing from the task model
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let tasks = tasks
            .iter()
            .map(|task| {
                let (src, stages) = match &task.action {
                    TaskAction::NoOp => (None, Vec::new()),
                    TaskAction::Pipeline(spec) => (
                        Some(spec.src.clone()),
                        spec.stages.iter().map(ToString::to_string).collect(),
                    ),
                };
                TaskInfo {
                    name: task.name.clone(),
                    deps: task.deps.clone(),
                    src,
                    stages,
                }
            })
            .collect();
        Self { tasks }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No tasks declared.");
            return;
        }

        println!("Tasks:\n");
        for task in &self.tasks {
            println!("  {}", task.name.bold());
            if !task.deps.is_empty() {
                println!("    after: {}", task.deps.join(", "));
            }
            if let Some(src) = &task.src {
                println!("    src: {src}");
                println!("    stages: {}", task.stages.join(", "));
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
