//! Download command implementation.
//!
//! Detects the browser version, lets the operator pick a matching driver,
//! and downloads it with a live progress line.

use crate::DownloadArgs;
use crate::config::FileConfig;
use crate::display::{default_output, select_candidate};
use crate::resolve::{major_version, matching_candidates};
use anyhow::{Context, Result};
use cdfetch_lib::prelude::*;

/// Pick and download a driver.
pub(crate) async fn download(args: &DownloadArgs, config: &FileConfig, quiet: bool) -> Result<()> {
    let platform = config.platform(args.target.platform);
    let major = major_version(&args.target, config, platform)?;
    if !quiet {
        println!("Current browser version = {major}");
    }

    let candidates = matching_candidates(config, major, platform).await?;
    let candidate = select_candidate(candidates, args.yes)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(config.output_dir.as_deref(), &candidate));
    let target = DownloadTarget::new(candidate.url.clone(), output);
    tracing::info!(driver = %candidate, path = %target.destination().display(), "downloading");

    let downloader = Downloader::new(
        &config.client_config(),
        config.download_options(args.remove_partial),
    )?;

    let mut progress: Box<dyn ProgressObserver> = if quiet {
        Box::new(ProgressCounter::silent())
    } else {
        Box::new(ProgressCounter::stdout())
    };

    downloader
        .download(&target, progress.as_mut())
        .await
        .with_context(|| format!("Failed to download {candidate}"))?;

    if !quiet {
        println!("Download finished: {}", target.destination().display());
    }
    Ok(())
}
