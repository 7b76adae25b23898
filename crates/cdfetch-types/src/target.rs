//! Download target definition.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the destination file name while a transfer is in flight.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Source URL and destination path for a single transfer.
///
/// The destination is only ever created by renaming the temporary artifact
/// at [`DownloadTarget::temp_path`] onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    source_url: String,
    destination: PathBuf,
}

impl DownloadTarget {
    /// Creates a new download target.
    #[must_use]
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination: destination.into(),
        }
    }

    /// Returns the URL to fetch.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Returns the final destination path.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Returns the path of the temporary artifact (`destination` + `.tmp`).
    #[must_use]
    pub fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.destination.as_os_str());
        name.push(TEMP_SUFFIX);
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_appends_suffix() {
        let target = DownloadTarget::new("http://x/y", "./chromedriver_mac64.zip");
        assert_eq!(target.temp_path(), PathBuf::from("./chromedriver_mac64.zip.tmp"));
    }

    #[test]
    fn test_temp_path_without_extension() {
        let target = DownloadTarget::new("http://x/y", "/opt/bin/chromedriver");
        assert_eq!(target.temp_path(), PathBuf::from("/opt/bin/chromedriver.tmp"));
        assert_eq!(target.destination(), Path::new("/opt/bin/chromedriver"));
        assert_eq!(target.source_url(), "http://x/y");
    }
}
