//! File system utilities for ideaflow
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, read_json_from, write_config, write_json};
pub use paths::{
    find_project_root, get_config_path, get_ideaflow_dir, resolve_cwd, IDEAFLOW_DIR,
};
