//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{IdeaflowError, Result};
use crate::schemas::Config;

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IdeaflowError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            IdeaflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        IdeaflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Read and deserialize JSON from a reader (used for stdin).
pub fn read_json_from<T: DeserializeOwned, R: Read>(mut reader: R) -> Result<T> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    serde_json::from_str(&content)
        .map_err(|e| IdeaflowError::InvalidJson(format!("Invalid JSON on input: {}", e)))
}

/// Write a value to a JSON file with pretty formatting.
///
/// Writes to a temp file and renames it into place, so readers never see a
/// partial file.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| IdeaflowError::InvalidJson(e.to_string()))?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file for a project.
///
/// Returns the default config if the file does not exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Write the config.json file for a project.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}
