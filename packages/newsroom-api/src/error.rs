//! Typed errors for the API client.

use thiserror::Error;

/// Everything a request against the backend can fail with. The app layer
/// handles `Unauthorized` once, centrally; the rest surface per call site.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection refused, unreadable body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 5xx from the backend.
    #[error("server error (HTTP {status})")]
    Server { status: u16 },

    /// 401 — the bearer token is missing, stale, or revoked.
    #[error("session expired")]
    Unauthorized,

    /// Any other 4xx, carrying the backend's message field when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Login rejected, or the login response carried no access token.
    #[error("{0}")]
    Auth(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Message suitable for a user-facing notice.
    pub fn notice(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            ApiError::Server { .. } => "The server had a problem. Please try again.".to_string(),
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Auth(message) => message.clone(),
            ApiError::Serialization(_) => {
                "Received an unreadable response from the server.".to_string()
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
