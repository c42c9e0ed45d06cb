//! Result of one submit event and the notification it produces.

use crate::error::SubmitError;
use crate::reply::ServerReply;

/// Notification shown after a 2xx reply
pub const POSTED_MESSAGE: &str = "Internship posted successfully!";

/// Prefix of the notification shown when the server rejects a submission
pub const REJECTED_PREFIX: &str = "Error: ";

/// Prefix of the notification shown when no usable reply was received
pub const FAILED_PREFIX: &str = "Error posting internship: ";

/// What happened to a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Server answered 2xx with a JSON body
    Posted,
    /// Server answered non-2xx with a JSON body
    Rejected { status: u16, message: String },
    /// Transport, decoding or encoding failure
    Failed(SubmitError),
}

impl SubmissionOutcome {
    /// Classify a decoded reply by its status.
    ///
    /// A non-2xx reply whose body is `null` is a failure, not a rejection.
    pub fn from_reply(reply: &ServerReply) -> Self {
        if reply.is_success() {
            return Self::Posted;
        }
        match reply.error_text() {
            Ok(message) => Self::Rejected {
                status: reply.status,
                message,
            },
            Err(err) => Self::Failed(err),
        }
    }

    /// Text of the blocking notification for this outcome
    pub fn notification(&self) -> String {
        match self {
            Self::Posted => POSTED_MESSAGE.to_string(),
            Self::Rejected { message, .. } => format!("{REJECTED_PREFIX}{message}"),
            Self::Failed(err) => format!("{FAILED_PREFIX}{err}"),
        }
    }

    /// Only a successful post clears the form
    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Posted)
    }
}

impl From<Result<ServerReply, SubmitError>> for SubmissionOutcome {
    fn from(result: Result<ServerReply, SubmitError>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(&reply),
            Err(err) => Self::Failed(err),
        }
    }
}
