//! Storage listing query and candidate filtering.

use crate::ClientConfig;
use cdfetch_types::{DriverCandidate, MajorVersion, Platform};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Public ChromeDriver storage bucket listing.
pub const DEFAULT_LISTING_URL: &str = "https://www.googleapis.com/storage/v1/b/chromedriver/o/";

/// Errors that can occur while querying the listing.
#[derive(Error, Debug)]
pub enum ListingError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("Listing request returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body is not a valid listing.
    #[error("Invalid listing response: {0}")]
    Decode(String),
}

/// One page of the storage listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingPage {
    #[serde(default)]
    items: Vec<ListingItem>,
    next_page_token: Option<String>,
}

/// One object in the storage listing. Only the fields cdfetch uses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingItem {
    name: String,
    media_link: Option<String>,
}

/// Client for the driver storage listing.
#[derive(Debug, Clone)]
pub struct ListingClient {
    client: Client,
    url: String,
}

impl ListingClient {
    /// Creates a listing client for the given listing URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig, url: impl Into<String>) -> Result<Self, ListingError> {
        Ok(Self {
            client: config.listing_client()?,
            url: url.into(),
        })
    }

    /// Creates a client for [`DEFAULT_LISTING_URL`] with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ListingError> {
        Self::new(&ClientConfig::default(), DEFAULT_LISTING_URL)
    }

    /// Returns the listing URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches every object in the listing, following page tokens.
    ///
    /// Objects without a download link are skipped. Paging stops at the
    /// first token that was already followed.
    ///
    /// # Errors
    ///
    /// Returns an error if any page cannot be fetched or decoded.
    pub async fn list(&self) -> Result<Vec<DriverCandidate>, ListingError> {
        let mut candidates = Vec::new();
        let mut token: Option<String> = None;
        let mut seen = HashSet::new();

        loop {
            let page = self.fetch_page(token.as_deref()).await?;
            tracing::debug!(
                items = page.items.len(),
                next = ?page.next_page_token,
                "fetched listing page"
            );

            candidates.extend(page.items.into_iter().filter_map(|item| {
                item.media_link
                    .map(|url| DriverCandidate::new(item.name, url))
            }));

            let Some(next) = page.next_page_token else {
                break;
            };
            if !seen.insert(next.clone()) {
                tracing::warn!(token = %next, "listing page token repeated, stopping");
                break;
            }
            token = Some(next);
        }

        Ok(candidates)
    }

    async fn fetch_page(&self, token: Option<&str>) -> Result<ListingPage, ListingError> {
        let mut request = self.client.get(&self.url);
        if let Some(token) = token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ListingError::Decode(e.to_string()))
    }
}

/// Returns true if the candidate is a driver for `major` on `platform`.
///
/// The object name must start with `"<major>."` so that major 11 does not
/// match a 115 build.
#[must_use]
pub fn matches_version(candidate: &DriverCandidate, major: MajorVersion, platform: Platform) -> bool {
    candidate.name.starts_with(&major.object_prefix()) && candidate.name.contains(platform.tag())
}

/// Keeps the candidates matching `major` and `platform`, newest version first.
#[must_use]
pub fn filter_candidates(
    candidates: impl IntoIterator<Item = DriverCandidate>,
    major: MajorVersion,
    platform: Platform,
) -> Vec<DriverCandidate> {
    let mut matching: Vec<DriverCandidate> = candidates
        .into_iter()
        .filter(|c| matches_version(c, major, platform))
        .collect();
    matching.sort_by(|a, b| b.version_key().cmp(&a.version_key()));
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn candidate(name: &str) -> DriverCandidate {
        DriverCandidate::new(name, format!("https://storage.example/{name}"))
    }

    #[test]
    fn test_matches_version_and_platform() {
        let major = MajorVersion::new(115);
        assert!(matches_version(
            &candidate("115.0.5790.170/chromedriver_mac64.zip"),
            major,
            Platform::Mac
        ));
        assert!(!matches_version(
            &candidate("115.0.5790.170/chromedriver_linux64.zip"),
            major,
            Platform::Mac
        ));
        assert!(!matches_version(
            &candidate("114.0.5735.90/chromedriver_mac64.zip"),
            major,
            Platform::Mac
        ));
    }

    #[test]
    fn test_matches_version_requires_full_component() {
        let c = candidate("115.0.5790.170/chromedriver_mac64.zip");
        assert!(!matches_version(&c, MajorVersion::new(11), Platform::Mac));
        assert!(!matches_version(&c, MajorVersion::new(1), Platform::Mac));
    }

    #[test]
    fn test_filter_candidates_orders_newest_first() {
        let items = vec![
            candidate("115.0.5790.9/chromedriver_mac64.zip"),
            candidate("114.0.5735.90/chromedriver_mac64.zip"),
            candidate("115.0.5790.170/chromedriver_mac_arm64.zip"),
            candidate("115.0.5790.102/chromedriver_linux64.zip"),
            candidate("115.0.5790.102/chromedriver_mac64.zip"),
        ];

        let filtered = filter_candidates(items, MajorVersion::new(115), Platform::Mac);
        let names: Vec<_> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "115.0.5790.170/chromedriver_mac_arm64.zip",
                "115.0.5790.102/chromedriver_mac64.zip",
                "115.0.5790.9/chromedriver_mac64.zip",
            ]
        );
    }

    #[test]
    fn test_filter_candidates_empty() {
        let filtered = filter_candidates(
            vec![candidate("2.46/chromedriver_win32.zip")],
            MajorVersion::new(115),
            Platform::Windows,
        );
        assert!(filtered.is_empty());
    }

    #[tokio::test]
    async fn test_list_single_page() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "kind": "storage#objects",
            "items": [
                { "name": "115.0.5790.170/chromedriver_mac64.zip", "mediaLink": "https://dl/1" },
                { "name": "115.0.5790.170/notes.txt" },
                { "name": "LATEST_RELEASE", "mediaLink": "https://dl/2" }
            ]
        });
        let mock = server
            .mock("GET", "/b/chromedriver/o/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = ListingClient::new(
            &ClientConfig::default(),
            format!("{}/b/chromedriver/o/", server.url()),
        )
        .unwrap();
        let items = client.list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            items,
            vec![
                DriverCandidate::new("115.0.5790.170/chromedriver_mac64.zip", "https://dl/1"),
                DriverCandidate::new("LATEST_RELEASE", "https://dl/2"),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_follows_page_token() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/o")
            .match_query(Matcher::Regex("^$".to_string()))
            .with_body(
                serde_json::json!({
                    "items": [{ "name": "a/chromedriver_linux64.zip", "mediaLink": "https://dl/a" }],
                    "nextPageToken": "page2"
                })
                .to_string(),
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", "/o")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "page2".into()))
            .with_body(
                serde_json::json!({
                    "items": [{ "name": "b/chromedriver_linux64.zip", "mediaLink": "https://dl/b" }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client =
            ListingClient::new(&ClientConfig::default(), format!("{}/o", server.url())).unwrap();
        let items = client.list().await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
        let names: Vec<_> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a/chromedriver_linux64.zip", "b/chromedriver_linux64.zip"]);
    }

    #[tokio::test]
    async fn test_list_stops_on_token_cycle() {
        let mut server = mockito::Server::new_async().await;
        let page = |name: &str, next: &str| {
            serde_json::json!({
                "items": [{ "name": name, "mediaLink": "https://dl/x" }],
                "nextPageToken": next
            })
            .to_string()
        };
        let first = server
            .mock("GET", "/o")
            .match_query(Matcher::Regex("^$".to_string()))
            .with_body(page("a/chromedriver_linux64.zip", "t2"))
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/o")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "t2".into()))
            .with_body(page("b/chromedriver_linux64.zip", "t3"))
            .expect(1)
            .create_async()
            .await;
        let third = server
            .mock("GET", "/o")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "t3".into()))
            .with_body(page("c/chromedriver_linux64.zip", "t2"))
            .expect(1)
            .create_async()
            .await;

        let client =
            ListingClient::new(&ClientConfig::default(), format!("{}/o", server.url())).unwrap();
        let items = client.list().await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;
        let names: Vec<_> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "a/chromedriver_linux64.zip",
                "b/chromedriver_linux64.zip",
                "c/chromedriver_linux64.zip"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/o")
            .with_status(503)
            .create_async()
            .await;

        let client =
            ListingClient::new(&ClientConfig::default(), format!("{}/o", server.url())).unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, ListingError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn test_list_invalid_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/o")
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client =
            ListingClient::new(&ClientConfig::default(), format!("{}/o", server.url())).unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, ListingError::Decode(_)));
    }

    #[test]
    fn test_default_listing_url() {
        assert!(DEFAULT_LISTING_URL.starts_with("https://www.googleapis.com/storage/v1/b/chromedriver"));
    }
}
