//! Configuration types for the Bountyhub SDK.

use std::time::Duration;
use url::Url;

/// Configuration for the Bountyhub client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the bounty board API.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let url = Url::parse("https://api.bountyhub.io").unwrap();
        let config = ClientConfig::new(url.clone());

        assert_eq!(config.base_url, url);
    }

    #[test]
    fn test_client_config_default_timeout() {
        let url = Url::parse("https://api.bountyhub.io").unwrap();
        let config = ClientConfig::new(url);

        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
