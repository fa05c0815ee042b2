//! Repository trait for the redirect persistence endpoint.

use crate::api::dto::{SubmitRequest, SubmitResponse};
use crate::error::FormError;
use async_trait::async_trait;

/// Persistence endpoint that creates or updates redirects.
///
/// The backend answers every call with a JSON envelope; whether the change was
/// accepted is decided by its `success` flag, not by the transport.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::HttpRedirectRepository`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_http.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Posts `request` to the action URL and returns the decoded envelope.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Transport`] if the request cannot be sent or the body
    /// cannot be read.
    ///
    /// Returns [`FormError::MalformedResponse`] if the body is not a valid envelope.
    async fn persist(
        &self,
        action_url: &str,
        request: &SubmitRequest,
    ) -> Result<SubmitResponse, FormError>;
}
