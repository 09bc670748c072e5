//! Error types for the product submission client.
//!
//! # Design
//! One variant per step of `ProductSubmitter::submit`. Every message starts
//! with a short prefix naming the step that failed, so the rendered error is
//! enough to tell where a call stopped. None of these are retried.

use thiserror::Error;

/// Boxed error returned by the pluggable transport and encoder capabilities.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `ProductSubmitter`.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The encoder could not turn the product into a request body.
    #[error("failed to marshal product: {0}")]
    Serialization(#[source] BoxError),

    /// The configured endpoint cannot form a valid request.
    #[error("failed to create request for '{endpoint}': {reason}")]
    RequestConstruction { endpoint: String, reason: String },

    /// The request was not delivered or no response came back.
    #[error("failed to send request: {0}")]
    Transport(#[source] BoxError),

    /// A response arrived with a status other than 200 or 201.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be decoded into a `Product`.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SubmitError {
    /// Status code observed when the remote rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}
