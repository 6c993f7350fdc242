//! Error types for mastodonctl

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for mastodonctl operations
#[derive(Error, Debug)]
pub enum MastodonError {
    /// The configuration file exists but is not valid JSON for the expected shape
    #[error("Configuration file {} is malformed: {reason}", path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// The request did not complete before the deadline
    #[error("Request to {endpoint} timed out after {}s", timeout.as_secs_f32())]
    Timeout { endpoint: String, timeout: Duration },

    /// Connection refused, DNS failure, broken transfer...
    #[error("Network error while calling {endpoint}: {reason}")]
    Network { endpoint: String, reason: String },

    /// The server answered with a non-success status code
    #[error("HTTP {status} from {endpoint}: {message}")]
    Http {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The response body could not be decoded into the expected record
    #[error("Failed to parse JSON response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

/// Result type alias for mastodonctl operations
pub type Result<T> = std::result::Result<T, MastodonError>;

impl MastodonError {
    /// Whether the error was caused by the request deadline expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, MastodonError::Timeout { .. })
    }
}
