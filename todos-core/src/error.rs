//! Error types for the remote store and configuration

use thiserror::Error;

/// Failures of a call to the remote todo collection
///
/// This is the only error kind the action layer produces. A failed call never
/// dispatches, so local state is left exactly as it was.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure: connection refused, reset, DNS, ...
    #[error("request to todo store failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("{method} {url} returned {status}")]
    Status {
        method: reqwest::Method,
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not have the expected shape
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response was well-formed but contradicts the request
    #[error("unexpected response from todo store: {0}")]
    UnexpectedResponse(String),
}

/// Result alias for remote operations
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API URL given: pass --api-url or set {0}")]
    MissingApiUrl(&'static str),

    #[error("invalid API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}
