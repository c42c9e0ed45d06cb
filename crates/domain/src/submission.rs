//! The flat name/value mapping sent to the server on submit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SubmitError;

/// Field name to field value, captured verbatim at submit time.
///
/// Serializes as a plain JSON object of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission(BTreeMap<String, String>);

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from name/value pairs. A repeated name keeps its last value,
    /// matching standard form-encoding semantics.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to the JSON request body
    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(self).map_err(SubmitError::encode)
    }
}
