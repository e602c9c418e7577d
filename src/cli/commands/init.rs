//! Init command - Write a default configuration

use std::path::Path;

use tracing::info;

use crate::errors::{IdeaflowError, Result};
use crate::fs::{get_config_path, resolve_cwd, write_config};
use crate::schemas::Config;

/// Create `.ideaflow/config.json` with default settings in the working directory
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let path = init_config(&root, force)?;
    info!(path = %path.display(), "Wrote default configuration");
    println!("Initialized {}", path.display());
    Ok(())
}

fn init_config(root: &Path, force: bool) -> Result<std::path::PathBuf> {
    let path = get_config_path(root);
    if path.exists() && !force {
        return Err(IdeaflowError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    write_config(root, &Config::default())?;
    Ok(path)
}
