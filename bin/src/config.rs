//! Configuration file loading.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/cdfetch/` on Linux). Every field is optional; command-line
//! flags take precedence over the file.

use anyhow::{Context, Result};
use cdfetch_lib::prelude::*;
use cdfetch_lib::DEFAULT_LISTING_URL;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    /// Storage listing to query instead of the public ChromeDriver bucket.
    pub(crate) listing_url: Option<String>,
    /// Driver platform when `--platform` is not given.
    pub(crate) platform: Option<Platform>,
    /// Browser binary when `--browser` is not given.
    pub(crate) browser_path: Option<PathBuf>,
    /// Directory for downloads when `--output` is not given.
    pub(crate) output_dir: Option<PathBuf>,
    /// Delete partial downloads on failure.
    pub(crate) remove_partial: Option<bool>,
    /// Listing request timeout in seconds.
    pub(crate) timeout_secs: Option<u64>,
    /// User agent for all requests.
    pub(crate) user_agent: Option<String>,
}

impl FileConfig {
    /// Returns the listing URL to query.
    pub(crate) fn listing_url(&self) -> &str {
        self.listing_url.as_deref().unwrap_or(DEFAULT_LISTING_URL)
    }

    /// Resolves the platform: flag, then file, then host.
    pub(crate) fn platform(&self, flag: Option<Platform>) -> Platform {
        flag.or(self.platform).unwrap_or_else(Platform::current)
    }

    /// Resolves the browser binary: flag, then file.
    pub(crate) fn browser_path<'a>(&'a self, flag: Option<&'a Path>) -> Option<&'a Path> {
        flag.or(self.browser_path.as_deref())
    }

    /// Builds the HTTP client configuration.
    pub(crate) fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = &self.user_agent {
            config.user_agent.clone_from(agent);
        }
        config
    }

    /// Builds the download options. `remove_partial_flag` forces removal on.
    pub(crate) fn download_options(&self, remove_partial_flag: bool) -> DownloadOptions {
        let remove = remove_partial_flag || self.remove_partial.unwrap_or(false);
        DownloadOptions {
            partial_policy: if remove {
                PartialPolicy::Remove
            } else {
                PartialPolicy::Keep
            },
        }
    }
}

/// Returns the default config file path, if a home directory is known.
pub(crate) fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cdfetch").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads the config file.
///
/// An explicit path must exist. A missing file at the default location
/// yields the defaults.
pub(crate) fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => read(path),
        None => match default_path() {
            Some(path) if path.is_file() => read(&path),
            _ => Ok(FileConfig::default()),
        },
    }
}

fn read(path: &Path) -> Result<FileConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: FileConfig = toml::from_str(&data)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
