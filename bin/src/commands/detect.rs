//! Detect command implementation.

use crate::config::FileConfig;
use anyhow::{Context, Result};
use cdfetch_lib::prelude::*;
use std::path::Path;

/// Print the major version of the installed browser.
pub(crate) fn detect(
    browser: Option<&Path>,
    platform: Option<Platform>,
    config: &FileConfig,
) -> Result<()> {
    let platform = config.platform(platform);
    let major = cdfetch_lib::detect(config.browser_path(browser), platform)
        .context("Failed to detect browser version")?;

    println!("{major}");
    Ok(())
}
