//! Form model: the declared fields of a form and their current text values.
//!
//! Values are always text, exactly as the user typed them. `FieldKind` only
//! decides how a field is rendered and which native constraints the browser
//! enforces on it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::DomainError;
use crate::submission::FormSubmission;

/// How a field is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single line text input
    Text,
    /// Multi-line text input
    TextArea,
    /// Numeric input with optional native bounds
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
}

impl FieldKind {
    /// A number field without bounds
    pub fn number() -> Self {
        Self::Number {
            min: None,
            max: None,
            step: None,
        }
    }

    /// A number field bounded to `[min, max]`
    pub fn bounded(min: f64, max: f64) -> Self {
        Self::Number {
            min: Some(min),
            max: Some(max),
            step: None,
        }
    }
}

/// A single declared form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            default_value: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the numeric step (no-op for non-number fields)
    pub fn with_step(mut self, value: f64) -> Self {
        if let FieldKind::Number { step, .. } = &mut self.kind {
            *step = Some(value);
        }
        self
    }
}

/// Ordered set of uniquely named fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FormField>", into = "Vec<FormField>")]
pub struct FormSchema {
    fields: Vec<FormField>,
}

impl FormSchema {
    /// Build a schema from fields in display order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a field name is empty or appears
    /// more than once.
    pub fn new(fields: Vec<FormField>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(DomainError::validation("Field name cannot be empty"));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(DomainError::validation(format!(
                    "duplicate field name: {}",
                    field.name
                )));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<FormField>> for FormSchema {
    type Error = DomainError;

    fn try_from(fields: Vec<FormField>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<FormSchema> for Vec<FormField> {
    fn from(schema: FormSchema) -> Self {
        schema.fields
    }
}

/// Current values of a form, one per schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: FormSchema,
    values: Vec<String>,
}

impl FormState {
    /// Fresh state with every field at its default value
    pub fn new(schema: FormSchema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| f.default_value.clone())
            .collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current value of `name`, `None` if the schema has no such field
    pub fn value(&self, name: &str) -> Option<&str> {
        self.index_of(name).map(|i| self.values[i].as_str())
    }

    /// Overwrite the value of `name`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownField` if the schema has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| DomainError::unknown_field(name))?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Put every field back to its default value
    pub fn reset(&mut self) {
        for (value, field) in self.values.iter_mut().zip(self.schema.fields()) {
            value.clone_from(&field.default_value);
        }
    }

    /// True when every field holds its default value
    pub fn is_pristine(&self) -> bool {
        self.values
            .iter()
            .zip(self.schema.fields())
            .all(|(value, field)| *value == field.default_value)
    }

    /// Collect the current values into a submission
    pub fn snapshot(&self) -> FormSubmission {
        FormSubmission::from_pairs(
            self.schema
                .fields()
                .iter()
                .zip(&self.values)
                .map(|(field, value)| (field.name.clone(), value.clone())),
        )
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.schema.fields().iter().position(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FormField::new("title", "Title", FieldKind::Text).required(),
            FormField::new("stipend", "Stipend", FieldKind::number()).with_default("0"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let result = FormSchema::new(vec![
            FormField::new("title", "Title", FieldKind::Text),
            FormField::new("title", "Other title", FieldKind::TextArea),
        ]);
        assert_eq!(
            result,
            Err(DomainError::validation("duplicate field name: title"))
        );
    }

    #[test]
    fn rejects_blank_field_names() {
        let result = FormSchema::new(vec![FormField::new("  ", "Blank", FieldKind::Text)]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn new_state_starts_at_defaults() {
        let state = FormState::new(schema());
        assert_eq!(state.value("title"), Some(""));
        assert_eq!(state.value("stipend"), Some("0"));
        assert!(state.is_pristine());
    }

    #[test]
    fn set_rejects_unknown_fields() {
        let mut state = FormState::new(schema());
        assert_eq!(
            state.set("salary", "100"),
            Err(DomainError::unknown_field("salary"))
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FormState::new(schema());
        state.set("title", "Rust Intern").unwrap();
        state.set("stipend", "1500").unwrap();
        assert!(!state.is_pristine());

        state.reset();

        assert_eq!(state.value("title"), Some(""));
        assert_eq!(state.value("stipend"), Some("0"));
        assert!(state.is_pristine());
    }

    #[test]
    fn snapshot_keeps_values_verbatim() {
        let mut state = FormState::new(schema());
        state.set("title", "  Rust Intern ").unwrap();
        state.set("stipend", "not a number").unwrap();

        let submission = state.snapshot();

        assert_eq!(submission.len(), 2);
        assert_eq!(submission.get("title"), Some("  Rust Intern "));
        assert_eq!(submission.get("stipend"), Some("not a number"));
    }

    #[test]
    fn step_only_applies_to_number_fields() {
        let text = FormField::new("title", "Title", FieldKind::Text).with_step(0.5);
        assert_eq!(text.kind, FieldKind::Text);

        let rating = FormField::new("rating", "Rating", FieldKind::bounded(0.0, 5.0)).with_step(0.1);
        assert_eq!(
            rating.kind,
            FieldKind::Number {
                min: Some(0.0),
                max: Some(5.0),
                step: Some(0.1),
            }
        );
    }

    #[test]
    fn schema_deserializes_from_field_list() {
        let json = r#"[
            {"name": "title", "label": "Title", "kind": {"type": "text"}, "required": true},
            {"name": "duration", "label": "Duration", "kind": {"type": "text"}}
        ]"#;
        let schema: FormSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.len(), 2);
        assert!(schema.field("title").unwrap().required);
        assert!(!schema.field("duration").unwrap().required);
    }
}
