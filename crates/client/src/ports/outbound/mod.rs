//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the submission use case to talk to the server, the user, and the
//! form without depending on concrete implementations.

pub mod api_port;
pub mod form_port;
pub mod notifier_port;

pub use api_port::{ApiError, RawResponse, SubmissionApiPort};
pub use form_port::FormPort;
pub use notifier_port::NotifierPort;

#[cfg(test)]
pub use api_port::MockSubmissionApiPort;
#[cfg(test)]
pub use form_port::MockFormPort;
#[cfg(test)]
pub use notifier_port::MockNotifierPort;
