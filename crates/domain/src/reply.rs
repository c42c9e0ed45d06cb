//! Server reply to a submission: HTTP status plus the JSON-decoded body.

use serde_json::Value;

use crate::error::SubmitError;

/// Placeholder shown when a failure reply carries no `error` field.
pub const MISSING_ERROR_TEXT: &str = "undefined";

/// Description of a failure reply whose body is JSON `null`
pub const NULL_REPLY_TEXT: &str = "Cannot read properties of null (reading 'error')";

/// A decoded server reply. No schema is enforced on `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerReply {
    pub status: u16,
    pub body: Value,
}

impl ServerReply {
    /// Decode a raw body as JSON, whatever the status.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Decode` if the body is not valid JSON, including
    /// an empty body.
    pub fn parse(status: u16, body: &str) -> Result<Self, SubmitError> {
        let body = serde_json::from_str(body).map_err(SubmitError::decode)?;
        Ok(Self { status, body })
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `error` field as shown to the user.
    ///
    /// Strings are returned as-is, other JSON values as compact JSON text,
    /// and a missing field (or a non-object body) as `undefined`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Decode` when the body is `null`: there is no
    /// value to read a field from.
    pub fn error_text(&self) -> Result<String, SubmitError> {
        match self.body.get("error") {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None if self.body.is_null() => Err(SubmitError::decode(NULL_REPLY_TEXT)),
            None => Ok(MISSING_ERROR_TEXT.to_string()),
        }
    }

    /// Identifier of the created record, when the server reports one
    pub fn created_id(&self) -> Option<&Value> {
        self.body.get("id")
    }
}
