//! Application layer services implementing the form workflow.
//!
//! This layer orchestrates domain operations: it turns operator input into
//! draft transitions, validates drafts, and coordinates submissions with the
//! repository, the notifier and the hosting listener.
//!
//! # Available Services
//!
//! - [`services::form_service::RedirectFormService`] - Draft state and submission coordination
//! - [`services::validation_service::RedirectValidator`] - Pre-submission checks

pub mod services;
