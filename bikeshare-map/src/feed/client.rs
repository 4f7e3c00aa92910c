//! GBFS HTTP client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use super::StationFeed;
use super::error::FeedError;
use super::types::{FeedDocument, InfoMap, StatusMap, parse_information, parse_status};

/// Default feed base URL (Oslo Bysykkel).
pub const DEFAULT_BASE_URL: &str = "https://gbfs.urbansharing.com/oslobysykkel.no";

/// Default value for the `Client-Identifier` header.
pub const DEFAULT_CLIENT_ID: &str = "bikeshare-map";

/// Header urbansharing asks every consumer to send.
const CLIENT_ID_HEADER: &str = "client-identifier";

const STATION_INFORMATION: &str = "station_information.json";
const STATION_STATUS: &str = "station_status.json";

/// Configuration for the GBFS client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL the feed file names are appended to
    pub base_url: String,
    /// Sent as `Client-Identifier` on every request
    pub client_id: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a config pointing at the default feed.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (other cities, or a local stub in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the client identifier.
    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = id.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for a GBFS station feed.
#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
    base_url: String,
}

impl GbfsClient {
    /// Create a new GBFS client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        let client_id =
            HeaderValue::from_str(&config.client_id).map_err(|_| FeedError::Config {
                message: format!("invalid client identifier: {:?}", config.client_id),
            })?;
        headers.insert(HeaderName::from_static(CLIENT_ID_HEADER), client_id);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET one feed file and return its body.
    async fn get_body(&self, file: &str) -> Result<String, FeedError> {
        let url = format!("{}/{}", self.base_url, file);
        debug!(%url, "fetching feed");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

impl StationFeed for GbfsClient {
    async fn fetch_station_info(&self) -> Result<FeedDocument<InfoMap>, FeedError> {
        let body = self.get_body(STATION_INFORMATION).await?;
        parse_information(&body)
    }

    async fn fetch_station_status(&self) -> Result<FeedDocument<StatusMap>, FeedError> {
        let body = self.get_body(STATION_STATUS).await?;
        parse_status(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FeedConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builders() {
        let config = FeedConfig::new()
            .with_base_url("http://localhost:8080")
            .with_client_id("acme-kiosk")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.client_id, "acme-kiosk");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client =
            GbfsClient::new(FeedConfig::new().with_base_url("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn invalid_client_id_is_rejected() {
        let result = GbfsClient::new(FeedConfig::new().with_client_id("bad\nid"));
        assert!(result.is_err());
    }
}
