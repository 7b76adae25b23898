//! Driver candidates from the storage listing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A downloadable driver object.
///
/// `name` is the storage object name, e.g.
/// `115.0.5790.170/chromedriver_mac64.zip`. `url` is the direct download
/// link for that object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverCandidate {
    /// Storage object name.
    pub name: String,
    /// Direct download URL.
    pub url: String,
}

impl DriverCandidate {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Returns the last path segment of the object name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Returns the full version the object belongs to (the leading path
    /// segment), or the whole name when it has no directory part.
    #[must_use]
    pub fn version(&self) -> &str {
        self.name.split('/').next().unwrap_or(&self.name)
    }

    /// Returns the numeric components of [`Self::version`] for ordering.
    ///
    /// Non-numeric components are skipped.
    #[must_use]
    pub fn version_key(&self) -> Vec<u32> {
        self.version()
            .split('.')
            .filter_map(|part| part.parse().ok())
            .collect()
    }
}

impl fmt::Display for DriverCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts() {
        let c = DriverCandidate::new(
            "115.0.5790.170/chromedriver_mac64.zip",
            "https://example.com/a",
        );
        assert_eq!(c.file_name(), "chromedriver_mac64.zip");
        assert_eq!(c.version(), "115.0.5790.170");
        assert_eq!(c.version_key(), vec![115, 0, 5790, 170]);
        assert_eq!(c.to_string(), "115.0.5790.170/chromedriver_mac64.zip");
    }

    #[test]
    fn test_flat_name() {
        let c = DriverCandidate::new("LATEST_RELEASE", "https://example.com/b");
        assert_eq!(c.file_name(), "LATEST_RELEASE");
        assert_eq!(c.version(), "LATEST_RELEASE");
        assert!(c.version_key().is_empty());
    }

    #[test]
    fn test_version_key_ordering() {
        let older = DriverCandidate::new("115.0.5790.9/x", "u");
        let newer = DriverCandidate::new("115.0.5790.170/x", "u");
        assert!(older.version_key() < newer.version_key());
    }
}
