//! Write a starter manifest

use std::env;
use std::fs;

use anyhow::bail;

use suds::manifest::MANIFEST_TEMPLATE;
use suds::output::{OperationResult, OutputMode};
use suds::paths;

/// Write the `suds.toml` template to the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let root = env::current_dir()?;
    let path = paths::manifest_path(&root);

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            paths::MANIFEST_FILE
        );
    }

    fs::write(&path, MANIFEST_TEMPLATE)?;

    let result = OperationResult {
        success: true,
        message: format!("Created {}", paths::MANIFEST_FILE),
    };
    result.render(mode);
    Ok(())
}
