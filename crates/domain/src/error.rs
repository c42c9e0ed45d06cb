//! Unified error types for the domain layer
//!
//! `DomainError` covers invariants of the form model. `SubmitError` is the
//! failure half of a submission outcome and carries only the description that
//! is shown to the user.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., duplicate field names in a schema)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A field name that the schema does not declare
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl DomainError {
    /// Creates a validation error for schema invariant violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Field name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}

/// Why a submission never produced a usable server reply.
///
/// The `Display` output is the bare description: it is appended verbatim to
/// the generic failure notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No response was received (network down, request refused, aborted).
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its body is not JSON, or is a `null` failure body.
    #[error("{0}")]
    Decode(String),

    /// The form data could not be serialized.
    #[error("{0}")]
    Encode(String),
}

impl SubmitError {
    pub fn transport(msg: impl ToString) -> Self {
        Self::Transport(msg.to_string())
    }

    pub fn decode(msg: impl ToString) -> Self {
        Self::Decode(msg.to_string())
    }

    pub fn encode(msg: impl ToString) -> Self {
        Self::Encode(msg.to_string())
    }
}
