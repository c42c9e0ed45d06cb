//! Application layer - use cases over the outbound ports.

pub mod submit_internship;

pub use submit_internship::SubmitInternship;
