//! Error types for value parsing.

use thiserror::Error;

/// Error for strings that do not start with a numeric version component.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The input was empty or only whitespace.
    #[error("Empty version string")]
    Empty,

    /// The leading component is not a number.
    #[error("Invalid version: {0}")]
    NotNumeric(String),
}

/// Error for unrecognised platform names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown platform: {0}. Valid options: mac, linux, win")]
pub struct PlatformParseError(pub String);
