//! HTTP transport layer for the Bountyhub SDK.

use crate::config::ClientConfig;
use crate::error::{BountyError, BountyResult};
use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
///
/// Every outbound call goes through this type; there is no other path to
/// the remote service. Non-2xx responses are mapped to
/// [`BountyError::Api`] with the body text. No retries: a failed call is
/// the caller's to handle.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> BountyResult<Self> {
        let mut headers = header::HeaderMap::new();

        // Default content type; per-request headers take precedence
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> BountyResult<url::Url> {
        self.config
            .base_url
            .join(path)
            .map_err(BountyError::InvalidUrl)
    }

    /// Send a request and decode the JSON body, or fail on a non-2xx status.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> BountyResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BountyError::from_response(status.as_u16(), &body));
        }

        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> BountyResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> BountyResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        self.execute(self.client.post(url).json(body)).await
    }
}
