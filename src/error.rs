//! Error type shared by the redirect form and its collaborators.

use crate::application::services::ValidationFailure;

/// Everything that can stop a redirect from being saved.
///
/// None of these are fatal to the form: the draft is preserved and the
/// operator may correct it and submit again.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Client-side check failed; no request was sent.
    #[error("{0}")]
    Validation(ValidationFailure),

    /// The endpoint answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON document.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// A completion arrived for a submission the form no longer waits for.
    #[error("Submission result no longer applies to this form")]
    StaleSubmission,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FormError {
    pub fn validation(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
