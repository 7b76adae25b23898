//! Rust library for fetching ChromeDriver builds that match a local browser.
//!
//! This is a facade crate that re-exports functionality from the cdfetch
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use cdfetch_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let platform = Platform::current();
//!     let major = detect(None, platform)?;
//!
//!     let listing = ListingClient::with_defaults()?;
//!     let candidates = filter_candidates(listing.list().await?, major, platform);
//!     let newest = candidates.first().ok_or("no driver found")?;
//!
//!     let target = DownloadTarget::new(&newest.url, newest.file_name());
//!     let mut progress = ProgressCounter::stdout();
//!     Downloader::with_defaults()?.download(&target, &mut progress).await?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cdfetch/cdfetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use cdfetch_types::*;

// Re-export browser detection
#[cfg(feature = "browser")]
pub use cdfetch_browser::{
    BrowserLocator, DetectError, detect, detect_version, parse_version_output,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use cdfetch_fetch::{
    BoxError, ClientConfig, DEFAULT_LISTING_URL, DownloadError, DownloadOptions, Downloader,
    ListingClient, ListingError, PartialPolicy, ProgressCounter, ProgressObserver,
    TransferFailure, filter_candidates, matches_version,
};

/// Prelude module for convenient imports.
///
/// ```
/// use cdfetch_lib::prelude::*;
/// ```
pub mod prelude {
    pub use cdfetch_types::{
        DownloadTarget, DriverCandidate, MajorVersion, Platform, VersionError,
    };

    #[cfg(feature = "browser")]
    pub use cdfetch_browser::{BrowserLocator, detect};

    #[cfg(feature = "fetch")]
    pub use cdfetch_fetch::{
        ClientConfig, DownloadOptions, Downloader, ListingClient, PartialPolicy,
        ProgressCounter, ProgressObserver, filter_candidates,
    };
}
