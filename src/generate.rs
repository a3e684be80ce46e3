// src/generate.rs
use crate::config::Config;
use crate::error::{GenError, Result};
use crate::manifest;
use crate::render;
use crate::version::Version;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Terminal state of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No usable manifest; nothing was generated or touched.
    Skipped,
    /// The header already matches the manifest; no write happened.
    UpToDate { version: String },
    /// The header was (re)written.
    Generated { version: String },
}

/// Non-fatal conditions surfaced to the user as warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    ManifestMissing(PathBuf),
    ManifestUnreadable(String),
    InvalidVersion(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestMissing(path) => {
                write!(f, "library.json not found at {}", path.display())
            }
            Self::ManifestUnreadable(reason) => write!(f, "{reason}"),
            Self::InvalidVersion(raw) => write!(f, "Invalid version format: {raw}"),
        }
    }
}

/// What happened during a pass, plus any warnings to report.
#[derive(Debug)]
pub struct Report {
    pub outcome: Outcome,
    pub warnings: Vec<Warning>,
}

impl Report {
    fn skipped(warning: Warning) -> Self {
        Self {
            outcome: Outcome::Skipped,
            warnings: vec![warning],
        }
    }
}

/// Run one generation pass against `config.project_dir`.
///
/// Manifest problems degrade to warnings and skip the pass so a missing
/// version file never aborts the surrounding build. Filesystem failures on
/// the output side (directory creation, header read/write) are returned as
/// errors instead, since losing the artifact silently would corrupt
/// downstream builds.
///
/// # Errors
/// Returns an error only for output-side filesystem failures.
pub fn run(config: &Config) -> Result<Report> {
    let manifest_path = config.manifest_path();
    if !manifest_path.exists() {
        return Ok(Report::skipped(Warning::ManifestMissing(manifest_path)));
    }

    let manifest = match manifest::load(&manifest_path) {
        Ok(m) => m,
        Err(e) => return Ok(Report::skipped(Warning::ManifestUnreadable(e.to_string()))),
    };

    let mut warnings = Vec::new();
    let parsed = match Version::parse(&manifest.version) {
        Some(v) => v,
        None => {
            warnings.push(Warning::InvalidVersion(manifest.version.clone()));
            Version::ZERO
        }
    };

    let content = render::render_header(&manifest.name, &manifest.version, &parsed);
    let header_path = config.header_path(&manifest.name);

    if let Some(dir) = header_path.parent() {
        fs::create_dir_all(dir).map_err(|e| GenError::DirCreate {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    // An unchanged header must keep its mtime; compare before writing.
    if header_path.exists() {
        let existing = fs::read(&header_path).map_err(|e| GenError::HeaderRead {
            path: header_path.clone(),
            source: e,
        })?;
        if existing == content.as_bytes() {
            return Ok(Report {
                outcome: Outcome::UpToDate {
                    version: manifest.version,
                },
                warnings,
            });
        }
    }

    fs::write(&header_path, &content).map_err(|e| GenError::HeaderWrite {
        path: header_path.clone(),
        source: e,
    })?;

    Ok(Report {
        outcome: Outcome::Generated {
            version: manifest.version,
        },
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_manifest(json: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().expect("temp project dir");
        fs::write(dir.path().join("library.json"), json).expect("write manifest");
        let config = Config::new(dir.path());
        (dir, config)
    }

    #[test]
    fn generates_then_reports_up_to_date() {
        let (_dir, config) = project_with_manifest(r#"{"name": "widget", "version": "1.2.3"}"#);

        let first = run(&config).expect("first pass");
        assert_eq!(
            first.outcome,
            Outcome::Generated {
                version: "1.2.3".into()
            }
        );
        assert!(first.warnings.is_empty());

        let bytes = fs::read(config.header_path("widget")).expect("header exists");

        let second = run(&config).expect("second pass");
        assert_eq!(
            second.outcome,
            Outcome::UpToDate {
                version: "1.2.3".into()
            }
        );
        assert_eq!(bytes, fs::read(config.header_path("widget")).unwrap());
    }

    #[test]
    fn missing_manifest_skips_without_touching_fs() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());

        let report = run(&config).expect("skip is not an error");
        assert_eq!(report.outcome, Outcome::Skipped);
        assert!(matches!(report.warnings[0], Warning::ManifestMissing(_)));
        assert!(!dir.path().join("include").exists());
    }

    #[test]
    fn malformed_manifest_skips_with_warning() {
        let (_dir, config) = project_with_manifest("{not json");

        let report = run(&config).expect("skip is not an error");
        assert_eq!(report.outcome, Outcome::Skipped);
        assert!(matches!(report.warnings[0], Warning::ManifestUnreadable(_)));
    }

    #[test]
    fn invalid_version_warns_but_still_generates() {
        let (_dir, config) = project_with_manifest(r#"{"name": "widget", "version": "abc"}"#);

        let report = run(&config).expect("generation proceeds");
        assert_eq!(
            report.outcome,
            Outcome::Generated {
                version: "abc".into()
            }
        );
        assert_eq!(report.warnings, vec![Warning::InvalidVersion("abc".into())]);

        let header = fs::read_to_string(config.header_path("widget")).unwrap();
        assert!(header.contains(r#"VERSION = "abc";"#));
        assert!(header.contains("VERSION_INT = 0;"));
    }

    #[test]
    fn rewrites_header_that_drifted() {
        let (_dir, config) = project_with_manifest(r#"{"name": "widget", "version": "1.2.3"}"#);

        run(&config).expect("first pass");
        fs::write(config.header_path("widget"), "// edited by hand\n").unwrap();

        let report = run(&config).expect("second pass");
        assert_eq!(
            report.outcome,
            Outcome::Generated {
                version: "1.2.3".into()
            }
        );
        let header = fs::read_to_string(config.header_path("widget")).unwrap();
        assert!(header.contains("VERSION_INT = 10203;"));
    }
}
