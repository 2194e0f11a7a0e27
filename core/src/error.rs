//! Error types for the accounts client.
//!
//! # Design
//! Each variant is one failure class. `Validation` and `Configuration` are
//! raised before any request leaves the process; `Server` keeps the raw
//! status and body so nothing the service said is lost.

use thiserror::Error;

/// Errors returned by `AccountsClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL could not be parsed or cannot carry path segments.
    #[error("invalid base URL: {0}")]
    Configuration(String),

    /// A required field failed the local pre-flight check. No request was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request could not be executed (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status outside the accepted range.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    /// Status code of a `Server` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
