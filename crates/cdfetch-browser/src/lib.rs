//! Local browser discovery and version detection for cdfetch.
//!
//! - [`BrowserLocator`] - Default install locations per platform
//! - [`detect_version`] - Runs a browser binary with `--version`
//! - [`parse_version_output`] - Extracts the major version from that output

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cdfetch/cdfetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod detect;
mod locate;

pub use detect::{DetectError, detect, detect_version, parse_version_output};
pub use locate::BrowserLocator;
