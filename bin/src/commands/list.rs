//! List command implementation.
//!
//! Prints the drivers in the storage listing that match the browser version.

use crate::TargetArgs;
use crate::config::FileConfig;
use crate::display::print_candidates;
use crate::resolve::{major_version, matching_candidates};
use anyhow::Result;

/// List drivers for the detected (or given) major version.
pub(crate) async fn list(args: &TargetArgs, config: &FileConfig) -> Result<()> {
    let platform = config.platform(args.platform);
    let major = major_version(args, config, platform)?;

    let candidates = matching_candidates(config, major, platform).await?;
    print_candidates(&candidates);
    Ok(())
}
