//! Target platform definitions.

use crate::PlatformParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system a driver binary is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS.
    Mac,
    /// Linux.
    Linux,
    /// Windows.
    #[serde(rename = "win", alias = "windows")]
    Windows,
}

impl Platform {
    /// Returns the substring that identifies this platform in driver
    /// object names (`chromedriver_mac64.zip`, `chromedriver_linux64.zip`, ...).
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Linux => "linux",
            Self::Windows => "win",
        }
    }

    /// Returns the platform of the running host.
    ///
    /// Unknown operating systems fall back to Linux, which matches the
    /// naming used for other Unix builds.
    #[must_use]
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Self::Mac,
            "windows" => Self::Windows,
            _ => Self::Linux,
        }
    }

    /// Returns all platforms.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Mac, Self::Linux, Self::Windows]
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mac" | "macos" | "darwin" | "osx" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            "win" | "windows" => Ok(Self::Windows),
            _ => Err(PlatformParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
