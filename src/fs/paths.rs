//! Path resolution utilities for ideaflow
//!
//! Locates the project root (the nearest directory holding `.ideaflow`) and
//! builds paths to the files inside it.

use std::path::{Path, PathBuf};

use crate::errors::{IdeaflowError, Result};

/// Name of the per-project settings directory
pub const IDEAFLOW_DIR: &str = ".ideaflow";

/// Find the nearest ancestor of `start_cwd` (inclusive) containing `.ideaflow`.
///
/// # Returns
/// The project root, or None if no ancestor has a `.ideaflow` directory
///
/// # Errors
/// * `ConfigError` - If the starting path cannot be resolved
pub fn find_project_root(start_cwd: &Path) -> Result<Option<PathBuf>> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| IdeaflowError::ConfigError(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(IDEAFLOW_DIR).is_dir() {
            return Ok(Some(current));
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return Ok(None),
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .ideaflow directory.
pub fn get_ideaflow_dir(root: &Path) -> PathBuf {
    root.join(IDEAFLOW_DIR)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_ideaflow_dir(root).join("config.json")
}
