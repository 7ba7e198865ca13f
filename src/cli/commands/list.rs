//! List the declared tasks

use std::env;

use suds::manifest::Manifest;
use suds::output::{ListResult, OutputMode};

/// Show every declared task with its prerequisites and stage chain
pub fn list(mode: OutputMode) -> anyhow::Result<()> {
    let root = env::current_dir()?;
    let manifest = Manifest::load(&root)?;
    let tasks = manifest.tasks()?;

    let result = ListResult::from_tasks(&tasks);
    result.render(mode);
    Ok(())
}
