//! Persistence of redirect changes.
//!
//! Implements the [`crate::domain::repositories::RedirectRepository`] trait
//! against the backend's JSON actions.
//!
//! # Implementations
//!
//! - [`HttpRedirectRepository`] - POSTs JSON with `reqwest`
//!
//! # Error Handling
//!
//! Transport problems map to [`crate::error::FormError::Transport`], bodies
//! that are not a valid envelope to [`crate::error::FormError::MalformedResponse`].
//! A decoded envelope is returned as-is, whatever its `success` flag.

pub mod http_redirect_repository;

pub use http_redirect_repository::{HttpRedirectRepository, JSON_CONTENT_TYPE};
