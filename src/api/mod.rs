//! Wire and display layer of the redirect form.
//!
//! This layer defines the request/response contract of the backend's
//! create/update actions and the projection the form is rendered from.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization and display
pub mod dto;
