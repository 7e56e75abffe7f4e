//! Error types shared by the request builder, the API client and the config layer
//!
//! Every error is `Clone` so it can be carried inside iced messages.

use thiserror::Error;

/// Form input that cannot be turned into a request. No network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a search query")]
    EmptyQuery,
    #[error("Invalid maximum fee: {0:?}")]
    InvalidMaxFee(String),
    #[error("Unknown provider type: {0:?}")]
    UnknownProviderType(String),
}

/// Failure of the search call itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The server answered with a non-2xx status.
    #[error("{status} {status_text} - {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    /// No response at all (DNS, connection refused, reset...).
    #[error("{0}")]
    Network(String),
    /// 2xx status but the body is not a search response.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl SearchError {
    /// Status code if the server responded at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SearchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user in the error panel.
    pub fn user_message(&self) -> String {
        format!("Search failed: {}", self)
    }
}

/// The health endpoint could not provide stats. Logged, never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsUnavailable {
    #[error("health check returned status {0}")]
    Status(u16),
    #[error("health check failed: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
