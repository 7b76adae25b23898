//! Browser install locations.

use cdfetch_types::Platform;
use std::path::PathBuf;

/// Application bundle binary on macOS.
const MAC_CHROME: &str = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";

/// Executable names searched on `PATH` on Linux, in preference order.
const LINUX_EXECUTABLES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
];

/// Default install paths on Windows.
const WINDOWS_CHROME: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

/// Finds browser binaries in their usual install locations.
#[derive(Debug, Clone, Copy)]
pub struct BrowserLocator {
    platform: Platform,
}

impl BrowserLocator {
    /// Creates a locator for the given platform.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Returns the candidate binary paths for the platform, in preference order.
    ///
    /// On Linux the names are resolved through `PATH`, so only installed
    /// executables are returned. Fixed paths on macOS and Windows are returned
    /// whether or not they exist.
    #[must_use]
    pub fn default_candidates(&self) -> Vec<PathBuf> {
        match self.platform {
            Platform::Mac => vec![PathBuf::from(MAC_CHROME)],
            Platform::Linux => LINUX_EXECUTABLES
                .iter()
                .filter_map(|name| which::which(name).ok())
                .collect(),
            Platform::Windows => WINDOWS_CHROME.iter().map(PathBuf::from).collect(),
        }
    }

    /// Returns the first default candidate that exists on disk.
    #[must_use]
    pub fn find(&self) -> Option<PathBuf> {
        self.default_candidates()
            .into_iter()
            .find(|path| path.is_file())
    }
}

impl Default for BrowserLocator {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_candidate() {
        let locator = BrowserLocator::new(Platform::Mac);
        assert_eq!(locator.default_candidates(), vec![PathBuf::from(MAC_CHROME)]);
    }

    #[test]
    fn test_windows_candidates() {
        let locator = BrowserLocator::new(Platform::Windows);
        let candidates = locator.default_candidates();
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].to_string_lossy().ends_with("chrome.exe"));
    }

    #[test]
    fn test_linux_candidates_are_installed() {
        let locator = BrowserLocator::new(Platform::Linux);
        for path in locator.default_candidates() {
            assert!(path.is_file());
        }
        assert_eq!(locator.find(), locator.default_candidates().into_iter().next());
    }
}
