//! Run a task and its prerequisites

use std::env;
use std::time::Instant;

use suds::core::services::runner::Runner;
use suds::manifest::{DEFAULT_TASK, Manifest};
use suds::output::{OutputMode, RunResult};

/// Run the named task (or `default`) through the task graph
pub fn run(task: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let root = env::current_dir()?;
    let manifest = Manifest::load(&root)?;
    let tasks = manifest.tasks()?;

    let name = task.unwrap_or(DEFAULT_TASK);
    let runner = Runner::new(root, tasks);

    let started = Instant::now();
    let runs = runner.run(name)?;

    let result = RunResult::new(name, &runs, started.elapsed());
    result.render(mode);
    Ok(())
}
