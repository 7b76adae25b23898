//! Browser major version.

use crate::VersionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The leading numeric component of a dotted version string.
///
/// `"115.0.5790.170"` and `"115"` both parse to `MajorVersion(115)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MajorVersion(u32);

impl MajorVersion {
    /// Creates a major version from its numeric value.
    #[must_use]
    pub const fn new(major: u32) -> Self {
        Self(major)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the prefix a storage object name must start with to belong
    /// to this major version, e.g. `"115."`.
    #[must_use]
    pub fn object_prefix(&self) -> String {
        format!("{}.", self.0)
    }
}

impl FromStr for MajorVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let leading = s.split('.').next().unwrap_or(s);
        leading
            .parse::<u32>()
            .map(Self)
            .map_err(|_| VersionError::NotNumeric(s.to_string()))
    }
}

impl fmt::Display for MajorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
