//! Main client for the Bountyhub SDK.

use crate::api::{BountiesApi, StatsApi};
use crate::config::ClientConfig;
use crate::error::{BountyError, BountyResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the bounty board API.
#[derive(Clone)]
pub struct BountyClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl BountyClient {
    /// Create a new client builder.
    pub fn builder() -> BountyClientBuilder {
        BountyClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> BountyResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Get the bounties API.
    pub fn bounties(&self) -> BountiesApi<'_> {
        BountiesApi::new(self)
    }

    /// Get the stats API.
    pub fn stats(&self) -> StatsApi<'_> {
        StatsApi::new(self)
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }
}

/// Builder for creating a BountyClient.
pub struct BountyClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl BountyClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL of the bounty board API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> BountyResult<BountyClient> {
        let base_url_str = self
            .base_url
            .ok_or_else(|| BountyError::Config("base_url is required".to_string()))?;

        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            timeout: self.timeout,
        };

        BountyClient::from_config(config)
    }
}

impl Default for BountyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
