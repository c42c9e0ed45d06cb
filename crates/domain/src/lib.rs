//! InternHub domain types.
//!
//! Pure data and invariants for the internship submission form: what the form
//! declares, what it currently holds, what is sent, and what came back.

pub mod error;
pub mod form;
pub mod internship;
pub mod outcome;
pub mod reply;
pub mod submission;

pub use error::{DomainError, SubmitError};
pub use form::{FieldKind, FormField, FormSchema, FormState};
pub use internship::{internship_form, ADD_INTERNSHIP_PATH};
pub use outcome::{SubmissionOutcome, FAILED_PREFIX, POSTED_MESSAGE, REJECTED_PREFIX};
pub use reply::{ServerReply, MISSING_ERROR_TEXT, NULL_REPLY_TEXT};
pub use submission::FormSubmission;
