//! Repository and callback trait definitions for the domain layer.
//!
//! These traits abstract the collaborators the redirect form talks to. They are
//! implemented by concrete types in the infrastructure layer, or by the
//! application hosting the form.
//!
//! # Available Traits
//!
//! - [`RedirectRepository`] - Persistence endpoint for create/update
//! - [`RedirectListener`] - Callbacks into the hosting redirect list
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! See `tests/repository_http.rs` for the HTTP implementation.

pub mod redirect_listener;
pub mod redirect_repository;

pub use redirect_listener::{NoopListener, RedirectListener};
pub use redirect_repository::RedirectRepository;

#[cfg(test)]
pub use redirect_listener::MockRedirectListener;
#[cfg(test)]
pub use redirect_repository::MockRedirectRepository;
