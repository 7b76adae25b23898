//! Version and candidate resolution shared by the list and download commands.

use crate::TargetArgs;
use crate::config::FileConfig;
use anyhow::{Context, Result, bail};
use cdfetch_lib::prelude::*;

/// Returns the major version to match: `--major` if given, otherwise the
/// version of the installed browser.
pub(crate) fn major_version(
    args: &TargetArgs,
    config: &FileConfig,
    platform: Platform,
) -> Result<MajorVersion> {
    if let Some(major) = args.major {
        return Ok(major);
    }

    let browser = config.browser_path(args.browser.as_deref());
    detect(browser, platform).context("Failed to detect browser version")
}

/// Queries the listing and keeps the drivers for `major` on `platform`,
/// newest first.
pub(crate) async fn matching_candidates(
    config: &FileConfig,
    major: MajorVersion,
    platform: Platform,
) -> Result<Vec<DriverCandidate>> {
    let client = ListingClient::new(&config.client_config(), config.listing_url())?;
    let all = client
        .list()
        .await
        .with_context(|| format!("Failed to query {}", client.url()))?;
    tracing::info!(total = all.len(), "fetched driver listing");

    let matching = filter_candidates(all, major, platform);
    if matching.is_empty() {
        bail!("No {platform} drivers found for browser version {major}");
    }
    Ok(matching)
}
