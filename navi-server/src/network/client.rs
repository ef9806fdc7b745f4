//! HTTP client for the fantasy-transit network provider.

use tracing::debug;

use crate::domain::Line;

use super::error::{NetworkError, validate_world};
use super::types::parse_lines;

/// Default base URL for the network provider.
pub const DEFAULT_BASE_URL: &str = "https://fantasy-transit.appspot.com";

/// Configuration for the network client.
#[derive(Debug, Clone)]
pub struct NetworkClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NetworkClientConfig {
    /// Create a config pointing at the production provider.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NetworkClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the network provider.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    http: reqwest::Client,
    base_url: String,
}

impl NetworkClient {
    /// Create a new client.
    pub fn new(config: NetworkClientConfig) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL the lines of `world` are fetched from.
    pub fn net_url(&self) -> String {
        format!("{}/net", self.base_url)
    }

    /// Fetch all lines of a world.
    pub async fn fetch(&self, world: &str) -> Result<Vec<Line>, NetworkError> {
        validate_world(world)?;

        let response = self
            .http
            .get(self.net_url())
            .query(&[("world", world), ("format", "json")])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(NetworkError::UnknownWorld(world.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let lines = parse_lines(&body).map_err(|e| NetworkError::Json {
            message: e.to_string(),
        })?;

        debug!(world, lines = lines.len(), "fetched network");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = NetworkClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builders() {
        let config = NetworkClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn net_url_strips_trailing_slash() {
        let client =
            NetworkClient::new(NetworkClientConfig::new().with_base_url("http://localhost:8080/"))
                .unwrap();
        assert_eq!(client.net_url(), "http://localhost:8080/net");
    }

    #[tokio::test]
    async fn rejects_bad_world_before_request() {
        let client = NetworkClient::new(NetworkClientConfig::new()).unwrap();
        let err = client.fetch("../x").await.unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWorld(_)));
    }
}
