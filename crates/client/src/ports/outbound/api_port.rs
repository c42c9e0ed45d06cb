//! Submission API Port - Object-safe HTTP boundary
//!
//! Adapters only move bytes: they send the already serialized body and hand
//! back the status and raw body text. Decoding the body is the use case's job,
//! so a non-JSON reply surfaces as a decoding error rather than a transport one.

use thiserror::Error;

/// Transport-level failures. No response was received.
///
/// `Display` is the bare description, shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be built
    #[error("{0}")]
    Request(String),

    /// The request failed on the wire (unreachable, refused, aborted, timed out)
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    pub fn request(msg: impl ToString) -> Self {
        Self::Request(msg.to_string())
    }

    pub fn network(msg: impl ToString) -> Self {
        Self::Network(msg.to_string())
    }
}

/// Status and undecoded body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait SubmissionApiPort: Send + Sync {
    /// POST `body` to `path` with `Content-Type: application/json`.
    ///
    /// Any HTTP status is a successful call; only transport failures are errors.
    async fn post_json(&self, path: &str, body: &str) -> Result<RawResponse, ApiError>;
}
