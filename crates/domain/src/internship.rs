//! The "post an internship" form.
//!
//! Field names match the columns of the board's `internships` record, which is
//! what the `/add_internship` endpoint expects as JSON keys.

use crate::error::DomainError;
use crate::form::{FieldKind, FormField, FormSchema};

/// Path the internship form posts to
pub const ADD_INTERNSHIP_PATH: &str = "/add_internship";

pub mod fields {
    pub const TITLE: &str = "title";
    pub const COMPANY: &str = "company";
    pub const DESCRIPTION: &str = "description";
    pub const REQUIRED_SKILLS: &str = "required_skills";
    pub const DURATION: &str = "duration";
    pub const STIPEND: &str = "stipend";
    pub const POPULARITY: &str = "popularity";
    pub const RATING: &str = "rating";
    pub const COMPANY_PRESTIGE: &str = "company_prestige";
}

/// Schema of the internship form, in display order
pub fn internship_form() -> Result<FormSchema, DomainError> {
    FormSchema::new(vec![
        FormField::new(fields::TITLE, "Title", FieldKind::Text).required(),
        FormField::new(fields::COMPANY, "Company", FieldKind::Text).required(),
        FormField::new(fields::DESCRIPTION, "Description", FieldKind::TextArea).required(),
        FormField::new(fields::REQUIRED_SKILLS, "Required Skills", FieldKind::TextArea)
            .required(),
        FormField::new(fields::DURATION, "Duration", FieldKind::Text).required(),
        FormField::new(
            fields::STIPEND,
            "Stipend",
            FieldKind::Number {
                min: Some(0.0),
                max: None,
                step: None,
            },
        )
        .required(),
        FormField::new(
            fields::POPULARITY,
            "Popularity (0-100)",
            FieldKind::bounded(0.0, 100.0),
        )
        .required(),
        FormField::new(fields::RATING, "Rating (0-5)", FieldKind::bounded(0.0, 5.0))
            .with_step(0.1)
            .required(),
        FormField::new(
            fields::COMPANY_PRESTIGE,
            "Company Prestige (0-10)",
            FieldKind::bounded(0.0, 10.0),
        )
        .required(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;

    #[test]
    fn internship_form_declares_every_record_column() {
        let schema = internship_form().unwrap();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "company",
                "description",
                "required_skills",
                "duration",
                "stipend",
                "popularity",
                "rating",
                "company_prestige",
            ]
        );
        assert!(schema.fields().iter().all(|f| f.required));
    }

    #[test]
    fn submission_has_one_key_per_field() {
        let mut state = FormState::new(internship_form().unwrap());
        state.set(fields::TITLE, "AI Research Intern").unwrap();
        state.set(fields::RATING, "4.8").unwrap();

        let submission = state.snapshot();

        assert_eq!(submission.len(), 9);
        assert_eq!(submission.get(fields::TITLE), Some("AI Research Intern"));
        assert_eq!(submission.get(fields::RATING), Some("4.8"));
        assert_eq!(submission.get(fields::COMPANY), Some(""));
    }
}
