//! Error types used throughout the Nova client

use thiserror::Error;

/// Main error type for Nova operations
///
/// One variant per failure class so callers can tell a rejected input from a
/// failed exchange, and a transport problem from a contract mismatch with the
/// remote system.
#[derive(Error, Debug)]
pub enum NovaError {
    /// Invalid input rejected before any network call
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token acquisition failed. Fatal for the calling operation.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A data endpoint answered with a non-success status
    #[error("Nova API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// A successful response did not match the documented shape
    #[error("Response mapping error: {0}")]
    Mapping(String),

    /// Transport-level failure (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Local failure outside the remote contract (file IO, client build)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NovaError {
    /// True when the error came from the remote system rather than local
    /// validation (config errors never reach the wire).
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::Api { .. } | Self::Network(_))
    }
}

/// Result type alias for Nova operations
pub type Result<T> = std::result::Result<T, NovaError>;
