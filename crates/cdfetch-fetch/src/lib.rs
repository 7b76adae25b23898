//! Listing queries and atomic streaming downloads for cdfetch.
//!
//! This crate provides the network pipeline:
//!
//! - [`ListingClient`] - Queries the driver storage listing
//! - [`filter_candidates`] - Selects drivers for a major version and platform
//! - [`ProgressCounter`] - Counts transferred bytes and renders a status line
//! - [`Downloader`] - Streams a body to `<destination>.tmp` and publishes it
//!   with an atomic rename

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cdfetch/cdfetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod download;
mod listing;
mod progress;

pub use client::ClientConfig;
pub use download::{
    BoxError, DownloadError, DownloadOptions, Downloader, PartialPolicy, TransferFailure,
};
pub use listing::{
    DEFAULT_LISTING_URL, ListingClient, ListingError, filter_candidates, matches_version,
};
pub use progress::{ProgressCounter, ProgressObserver};
