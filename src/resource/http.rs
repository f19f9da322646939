//! reqwest transport for resource lists

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use super::error::{FetchError, FetchResult};
use super::fetch::ResourceFetcher;

/// Fetches resource lists over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, endpoint: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(
                status.as_u16(),
                status.canonical_reason(),
            ));
        }

        response.text().await.map_err(network_error)
    }
}

/// Error text with its source chain, so "Connection refused" survives the
/// reqwest wrapping. Causes already present in the text are not repeated.
fn network_error(err: reqwest::Error) -> FetchError {
    let mut message = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };

    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    FetchError::Network(message)
}
