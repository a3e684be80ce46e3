// src/config.rs
use crate::cli::Args;
use std::env;
use std::path::PathBuf;

/// Manifest file name looked up under the project root.
pub const MANIFEST_FILE: &str = "library.json";

/// File name of the generated header.
pub const HEADER_FILE: &str = "Version.h";

/// Resolved generation parameters, independent of the invoking build tool.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_dir: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let project_dir = args
            .project_dir
            .or_else(|| env::var_os("PROJECT_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { project_dir }
    }
}

impl Config {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    /// Path of the manifest the version is read from.
    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(MANIFEST_FILE)
    }

    /// Path of the generated header for the library `name`.
    ///
    /// The subdirectory uses `name` verbatim; only the rendered namespace
    /// is case-transformed.
    pub fn header_path(&self, name: &str) -> PathBuf {
        self.project_dir.join("include").join(name).join(HEADER_FILE)
    }
}
