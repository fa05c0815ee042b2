//! JSON-over-HTTP implementation of the redirect repository.

use async_trait::async_trait;
use reqwest::{Client, header};
use std::time::Duration;
use tracing::{debug, error};

use crate::api::dto::{SubmitRequest, SubmitResponse};
use crate::domain::repositories::RedirectRepository;
use crate::error::FormError;

/// Content type the backend expects for action calls.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Posts redirect changes to the backend's create/update actions.
///
/// The session cookie, when configured, is attached to every request so the
/// backend sees the same authenticated session that issued the CSRF token.
#[derive(Clone)]
pub struct HttpRedirectRepository {
    client: Client,
}

impl HttpRedirectRepository {
    /// Builds a repository with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Configuration`] if the cookie is not a valid header
    /// value or the client cannot be built.
    pub fn new(timeout: Duration, session_cookie: Option<&str>) -> Result<Self, FormError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(cookie) = session_cookie.filter(|c| !c.trim().is_empty()) {
            let mut value = header::HeaderValue::from_str(cookie.trim()).map_err(|e| {
                FormError::configuration(format!("REDIRECT_SESSION_COOKIE is invalid: {e}"))
            })?;
            value.set_sensitive(true);
            headers.insert(header::COOKIE, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .map_err(|e| FormError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RedirectRepository for HttpRedirectRepository {
    async fn persist(
        &self,
        action_url: &str,
        request: &SubmitRequest,
    ) -> Result<SubmitResponse, FormError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| FormError::transport(format!("Failed to encode request: {e}")))?;

        let response = self
            .client
            .post(action_url)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("Redirect endpoint request failed: {}", e);
                FormError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Redirect endpoint response read failed: {}", e);
            FormError::transport(format!("Failed to read response: {e}"))
        })?;

        debug!("Redirect endpoint answered {} ({} bytes)", status, body.len());

        serde_json::from_str(&body).map_err(|e| {
            error!("Redirect endpoint returned malformed JSON (status {})", status);
            FormError::malformed_response(e.to_string())
        })
    }
}
