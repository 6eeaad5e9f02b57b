//! JSON helpers shared by the config loader, candidate source, and driver.

use crate::error::ExtractError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON document.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, ExtractError> {
    let data = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), ExtractError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ExtractError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
