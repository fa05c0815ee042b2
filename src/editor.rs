//! Editor initialization.
//!
//! Turns a validated [`Config`] into a form wired to the HTTP endpoint, the
//! translation catalog and the caller's notification surface.

use crate::application::services::{FormCollaborators, RedirectFormService};
use crate::config::Config;
use crate::domain::entities::Redirect;
use crate::domain::repositories::RedirectListener;
use crate::infrastructure::i18n::{CatalogTranslator, Translator};
use crate::infrastructure::notification::Notifier;
use crate::infrastructure::persistence::HttpRedirectRepository;

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Form bound to the HTTP redirect endpoint.
pub type HttpRedirectForm = RedirectFormService<HttpRedirectRepository>;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

/// Loads the translation catalog, or an empty one if none is configured.
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be read or parsed.
pub fn load_translator(config: &Config) -> Result<Arc<dyn Translator>> {
    match &config.translations_path {
        Some(path) => {
            let catalog = CatalogTranslator::from_file(path)?;
            tracing::info!("Translations loaded from {}", path);
            Ok(Arc::new(catalog))
        }
        None => {
            tracing::info!("No translations configured, using built-in texts");
            Ok(Arc::new(CatalogTranslator::default()))
        }
    }
}

/// Builds a form for `existing` (update) or a new redirect (create).
///
/// # Errors
///
/// Returns an error if:
/// - The form context cannot be derived from the configuration
/// - The translation catalog cannot be loaded
/// - The HTTP client cannot be built
pub fn build_form(
    config: &Config,
    notifier: Arc<dyn Notifier>,
    listener: Arc<dyn RedirectListener>,
    existing: Option<Redirect>,
) -> Result<HttpRedirectForm> {
    let context = Arc::new(config.form_context()?);
    let translator = load_translator(config)?;

    let repository = HttpRedirectRepository::new(
        Duration::from_secs(config.request_timeout_secs),
        config.session_cookie.as_deref(),
    )
    .context("Failed to set up the redirect endpoint client")?;

    if let Some(redirect) = &existing {
        tracing::info!("Editing redirect {}", redirect.describe());
    }

    Ok(RedirectFormService::new(
        Arc::new(repository),
        context,
        FormCollaborators {
            notifier,
            listener,
            translator,
        },
        existing,
    ))
}
