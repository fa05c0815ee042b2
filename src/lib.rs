//! # Redirect Editor
//!
//! Create and edit URL redirect rules against a CMS backend's JSON endpoint.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Redirect entity, the draft state machine and collaborator traits
//! - **Application Layer** ([`application`]) - Validation and submission coordination
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP endpoint, notifications and translations
//! - **API Layer** ([`api`]) - Request/response DTOs and the form view projection
//!
//! ## Features
//!
//! - Create and update redirects with host, validity window and comment
//! - Self-redirect detection before anything is sent
//! - Related-change reporting when the backend adjusts other redirects
//! - Status codes without target (e.g. `410 Gone`)
//! - Translatable labels and messages
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export REDIRECT_CSRF_TOKEN="..."
//! export REDIRECT_CREATE_URL="https://cms.example.org/neos/management/redirects/create"
//! export REDIRECT_UPDATE_URL="https://cms.example.org/neos/management/redirects/update"
//! export REDIRECT_ORIGIN="https://cms.example.org"
//!
//! # Create a redirect
//! cargo run -- create --source old/page --target /new/page
//! ```
//!
//! ## Configuration
//!
//! Editor configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod editor;

pub use error::FormError;
pub use state::FormContext;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::{FormView, SubmitRequest, SubmitResponse};
    pub use crate::application::services::{
        ChangeSet, FormCollaborators, RedirectFormService, ValidationFailure,
    };
    pub use crate::domain::draft::{DateField, Draft, FormMode, TextField};
    pub use crate::domain::entities::{Redirect, StatusCodeCatalog};
    pub use crate::domain::repositories::{NoopListener, RedirectListener, RedirectRepository};
    pub use crate::error::FormError;
    pub use crate::infrastructure::i18n::{CatalogTranslator, Translator};
    pub use crate::infrastructure::notification::Notifier;
    pub use crate::state::{ActionUrls, FormContext};
    pub use crate::utils::input_normalizer::DateInput;
}
