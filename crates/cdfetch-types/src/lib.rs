//! Core types for the cdfetch ChromeDriver downloader.
//!
//! This crate provides the value types used throughout cdfetch:
//!
//! - [`MajorVersion`] - Leading numeric component of a browser version
//! - [`Platform`] - Target operating system for a driver binary
//! - [`DriverCandidate`] - A downloadable object from the storage listing
//! - [`DownloadTarget`] - Source URL and destination path for one transfer

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cdfetch/cdfetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candidate;
mod error;
mod platform;
mod target;
mod version;

pub use candidate::DriverCandidate;
pub use error::{PlatformParseError, VersionError};
pub use platform::Platform;
pub use target::{DownloadTarget, TEMP_SUFFIX};
pub use version::MajorVersion;
