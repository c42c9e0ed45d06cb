//! Handle on the form being submitted.
//!
//! The use case reads the form once when the submission starts and resets it
//! only after a successful post. The UI implements this over its own form
//! state, so the use case never reaches for a global document.

use internhub_domain::FormSubmission;

#[cfg_attr(test, mockall::automock)]
pub trait FormPort {
    /// Current field values, verbatim
    fn read_fields(&self) -> FormSubmission;

    /// Put every field back to its default value
    fn reset(&self);
}
