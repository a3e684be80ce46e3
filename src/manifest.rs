// src/manifest.rs
use crate::error::{GenError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Library name substituted when the manifest omits `name`.
pub const DEFAULT_NAME: &str = "DEVICE";

/// Version substituted when the manifest omits `version`.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// The subset of the project manifest this tool consumes.
///
/// All other manifest fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub version: String,
    pub name: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

/// Load and deserialize the manifest at `path`.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load(path: &Path) -> Result<Manifest> {
    let data = fs::read_to_string(path).map_err(|e| GenError::ManifestRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&data).map_err(|e| GenError::ManifestParse {
        path: path.to_path_buf(),
        source: e,
    })
}
