//! HTTP client configuration.

use reqwest::Client;
use std::time::Duration;

/// Configuration for the HTTP clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout for listing queries.
    ///
    /// Driver downloads are not bounded by this; they only use
    /// [`Self::connect_timeout`].
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("cdfetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Builds a client for small JSON requests, bounded by [`Self::timeout`].
    pub(crate) fn listing_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
    }

    /// Builds a client for body streaming with no overall deadline.
    pub(crate) fn download_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .connect_timeout(self.connect_timeout)
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent(&self.user_agent)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("cdfetch/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let config = ClientConfig::default();
        assert!(config.listing_client().is_ok());
        assert!(config.download_client().is_ok());
    }
}
