//! Business logic services for the application layer.

pub mod form_service;
pub mod validation_service;

pub use form_service::{
    ChangeSet, FormCollaborators, PendingSubmission, RedirectFormService, SubmissionOutcome,
};
pub use validation_service::{RedirectValidator, ValidationFailure};
