//! Error types for the registry client

use thiserror::Error;

/// Errors surfaced by registry and canister lookups
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Transport or body-decoding error from the HTTP layer
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type RegistryResult<T> = Result<T, RegistryError>;
