//! HTTP client wrapper for the directory API

use crate::config::{resolve_api_key, Config, ConfigPaths};
use crate::error::{CliError, CliResult};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Page size for paginated list endpoints
pub const PAGE_LIMIT: usize = 100;

/// API client for making authenticated requests
///
/// Authentication is API-key passthrough: every request carries the key in
/// the `x-api-key` header. There is no token refresh or retry logic.
pub struct ApiClient {
    client: Client,
    config: Config,
    api_key: String,
}

impl ApiClient {
    /// Create an API client from default config paths and key sources
    pub fn from_defaults(key: Option<&str>, key_file: Option<&Path>) -> CliResult<Self> {
        let paths = ConfigPaths::new()?;
        let config = Config::load(&paths)?;
        let api_key = resolve_api_key(key, key_file)?;
        Self::new(config, api_key)
    }

    /// Create a new API client
    pub fn new(config: Config, api_key: String) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Make an authenticated GET request
    pub async fn get(&self, url: &str) -> CliResult<reqwest::Response> {
        self.client
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(Into::into)
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> CliResult<reqwest::Response> {
        self.client
            .post(url)
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(Into::into)
    }

    /// Make an authenticated PUT request with JSON body
    pub async fn put_json<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> CliResult<reqwest::Response> {
        self.client
            .put(url)
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(Into::into)
    }

    /// Make an authenticated DELETE request
    pub async fn delete(&self, url: &str) -> CliResult<reqwest::Response> {
        self.client
            .delete(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(Into::into)
    }

    /// Turn a non-success response into a typed API error
    pub(crate) async fn api_error(response: reqwest::Response) -> CliError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        CliError::Api {
            status: status.as_u16(),
            message: body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let config = Config::default();
        let client = ApiClient::new(config, "test-key".to_string()).unwrap();
        assert_eq!(client.config().timeout_secs, 30);
    }
}
