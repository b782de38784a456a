//! Errors surfaced by collection store operations.

use thiserror::Error;

use crate::listing::ValidationError;

/// Why a store operation failed.
///
/// Every variant reaches the caller of the operation; none is retried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The listing was rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be completed (connect, DNS, timeout, reset).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Remote responded with HTTP {status} for '{url}'")]
    Response { url: String, status: u16 },

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("Unexpected response body from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl StoreError {
    /// Stable tag for logs and machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "validation_error",
            StoreError::Transport { .. } => "transport_error",
            StoreError::Response { .. } => "response_error",
            StoreError::Decode { .. } => "decode_error",
        }
    }

    /// HTTP status for `Response` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            StoreError::Validation(err) => Some(err),
            _ => None,
        }
    }
}
