//! Browser version detection.

use crate::BrowserLocator;
use cdfetch_types::{MajorVersion, Platform};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Errors that can occur while detecting the browser version.
#[derive(Error, Debug)]
pub enum DetectError {
    /// No browser binary was found in the default locations.
    #[error("No browser found for {0}; pass the binary path explicitly")]
    NotFound(Platform),

    /// The browser binary could not be started.
    #[error("Failed to run '{path}': {source}")]
    Spawn {
        /// The binary that could not be started.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The browser exited unsuccessfully.
    #[error("'{path}' exited with {status}")]
    ExitStatus {
        /// The binary that was run.
        path: PathBuf,
        /// Its exit status.
        status: ExitStatus,
    },

    /// The `--version` output contains no version number.
    #[error("Could not find a version in output: {0:?}")]
    Unparseable(String),
}

/// Extracts the major version from `--version` output such as
/// `"Google Chrome 115.0.5790.170 "` or `"Chromium 120.0.6099.71 snap"`.
///
/// The first whitespace-separated token starting with a digit is taken as
/// the version.
///
/// # Errors
///
/// Returns [`DetectError::Unparseable`] if no token parses as a version.
pub fn parse_version_output(output: &str) -> Result<MajorVersion, DetectError> {
    output
        .split_whitespace()
        .filter(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .find_map(|token| token.parse::<MajorVersion>().ok())
        .ok_or_else(|| DetectError::Unparseable(output.trim().to_string()))
}

/// Runs `<path> --version` and parses the major version from its stdout.
///
/// # Errors
///
/// Returns an error if the binary cannot be run, exits unsuccessfully, or
/// prints no recognisable version.
pub fn detect_version(path: &Path) -> Result<MajorVersion, DetectError> {
    tracing::debug!(path = %path.display(), "running browser --version");

    let output = Command::new(path)
        .arg("--version")
        .output()
        .map_err(|source| DetectError::Spawn {
            path: path.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(DetectError::ExitStatus {
            path: path.to_path_buf(),
            status: output.status,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = parse_version_output(&stdout)?;
    tracing::info!(path = %path.display(), %version, "detected browser version");
    Ok(version)
}

/// Detects the browser version from `explicit` if given, otherwise from the
/// first installed browser in the platform's default locations.
///
/// # Errors
///
/// Returns [`DetectError::NotFound`] if no browser is installed, or any
/// error from [`detect_version`].
pub fn detect(explicit: Option<&Path>, platform: Platform) -> Result<MajorVersion, DetectError> {
    match explicit {
        Some(path) => detect_version(path),
        None => {
            let path = BrowserLocator::new(platform)
                .find()
                .ok_or(DetectError::NotFound(platform))?;
            detect_version(&path)
        }
    }
}
