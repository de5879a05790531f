//! Error types for the Bountyhub SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type BountyResult<T> = Result<T, BountyError>;

/// Error types that can occur when using the Bountyhub SDK.
#[derive(Debug, thiserror::Error)]
pub enum BountyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bounty not found on the board.
    #[error("Bounty not found: {0}")]
    NotFound(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl BountyError {
    /// Create an API error from a status code and response body.
    ///
    /// The bounty board reports failures as `{"message": "..."}`; when the
    /// body is not that shape the raw text is carried instead.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("request failed with status {}", status)
                } else {
                    body.to_string()
                }
            });

        Self::Api { status, message }
    }
}

/// Error response from the bounty board API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
