//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::{IdeaflowError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration for the project containing `cwd`, falling back to defaults.
///
/// Walks up from `cwd` to the nearest `.ideaflow` directory. Without one,
/// or without a config.json inside it, the default configuration is used.
pub fn load_config(cwd: &Path) -> Result<Config> {
    match fs::find_project_root(cwd)? {
        Some(root) => load_config_from(&root),
        None => {
            debug!(cwd = %cwd.display(), "No .ideaflow directory found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load and check configuration from a known project root.
///
/// # Errors
/// * `InvalidJson` - If config.json is malformed
/// * `ConfigError` - If a length limit is zero
pub fn load_config_from(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    check_limits(&config)?;
    debug!(
        root = %root.display(),
        policy = %config.comment_policy,
        max_comment_length = config.max_comment_length,
        "Configuration loaded"
    );
    Ok(config)
}

fn check_limits(config: &Config) -> Result<()> {
    let limits = [
        ("max_comment_length", config.max_comment_length),
        ("max_title_length", config.max_title_length),
        ("max_category_length", config.max_category_length),
    ];
    for (name, value) in limits {
        if value == 0 {
            return Err(IdeaflowError::ConfigError(format!("{} must be greater than 0", name)));
        }
    }
    Ok(())
}
