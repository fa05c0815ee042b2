//! Editor configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any form is built.
//!
//! ## Required Variables
//!
//! ```bash
//! export REDIRECT_CSRF_TOKEN="..."                 # token issued with the backend session
//! export REDIRECT_CREATE_URL="https://cms.example.org/neos/management/redirects/create"
//! export REDIRECT_UPDATE_URL="https://cms.example.org/neos/management/redirects/update"
//! export REDIRECT_ORIGIN="https://cms.example.org" # origin serving the backend module
//! ```
//!
//! ## Optional Variables
//!
//! - `REDIRECT_STATUS_CODES` - Offered codes, e.g. `301=i18n,410=Gone`
//!   (default: `301=i18n,302=i18n,303=i18n,307=i18n,308=i18n,410=i18n`)
//! - `REDIRECT_DEFAULT_STATUS_CODE` - Preselected code for new redirects (default: `301`)
//! - `REDIRECT_SOURCE_PATTERN` - Pattern a source path must match entirely
//! - `REDIRECT_SESSION_COOKIE` - `Cookie` header sent with every request
//! - `REDIRECT_TRANSLATIONS` - Path to a JSON translation catalog
//! - `REDIRECT_DISPLAY_UTC_OFFSET_MINUTES` - Time zone of the date fields (default: `0`)
//! - `REDIRECT_REQUEST_TIMEOUT_SECS` - HTTP timeout (default: `20`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use chrono::FixedOffset;
use std::env;
use url::Url;

use crate::domain::entities::StatusCodeCatalog;
use crate::state::{ActionUrls, FormContext, anchored_pattern};
use crate::utils::url_normalizer::parse_origin;

pub const DEFAULT_STATUS_CODES: &str = "301=i18n,302=i18n,303=i18n,307=i18n,308=i18n,410=i18n";
pub const DEFAULT_SOURCE_PATTERN: &str = r"[a-zA-Z0-9_\-/\.%]+";

/// Editor configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub csrf_token: String,
    pub create_url: String,
    pub update_url: String,
    pub origin: String,
    pub status_codes: String,
    pub default_status_code: u16,
    pub source_pattern: String,
    /// Sent verbatim as `Cookie` header. Never logged.
    pub session_cookie: Option<String>,
    pub translations_path: Option<String>,
    pub display_utc_offset_minutes: i32,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric one does
    /// not parse.
    pub fn from_env() -> Result<Self> {
        let csrf_token =
            env::var("REDIRECT_CSRF_TOKEN").context("REDIRECT_CSRF_TOKEN must be set")?;
        let create_url =
            env::var("REDIRECT_CREATE_URL").context("REDIRECT_CREATE_URL must be set")?;
        let update_url =
            env::var("REDIRECT_UPDATE_URL").context("REDIRECT_UPDATE_URL must be set")?;
        let origin = env::var("REDIRECT_ORIGIN").context("REDIRECT_ORIGIN must be set")?;

        let status_codes =
            env::var("REDIRECT_STATUS_CODES").unwrap_or_else(|_| DEFAULT_STATUS_CODES.to_string());

        let default_status_code = match env::var("REDIRECT_DEFAULT_STATUS_CODE") {
            Ok(v) => v
                .trim()
                .parse()
                .context("REDIRECT_DEFAULT_STATUS_CODE must be a number")?,
            Err(_) => 301,
        };

        let source_pattern = env::var("REDIRECT_SOURCE_PATTERN")
            .unwrap_or_else(|_| DEFAULT_SOURCE_PATTERN.to_string());

        let session_cookie = env::var("REDIRECT_SESSION_COOKIE")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let translations_path = env::var("REDIRECT_TRANSLATIONS")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let display_utc_offset_minutes = match env::var("REDIRECT_DISPLAY_UTC_OFFSET_MINUTES") {
            Ok(v) => v
                .trim()
                .parse()
                .context("REDIRECT_DISPLAY_UTC_OFFSET_MINUTES must be a number")?,
            Err(_) => 0,
        };

        let request_timeout_secs = env::var("REDIRECT_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            csrf_token,
            create_url,
            update_url,
            origin,
            status_codes,
            default_status_code,
            source_pattern,
            session_cookie,
            translations_path,
            display_utc_offset_minutes,
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the CSRF token is empty
    /// - an action URL or the origin is not an HTTP(S) URL
    /// - the status code list is malformed or misses the default code
    /// - the source pattern does not compile
    /// - the display offset exceeds one day or the timeout is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.csrf_token.trim().is_empty() {
            anyhow::bail!("REDIRECT_CSRF_TOKEN must not be empty");
        }

        for (name, value) in [
            ("REDIRECT_CREATE_URL", &self.create_url),
            ("REDIRECT_UPDATE_URL", &self.update_url),
        ] {
            let url = Url::parse(value)
                .with_context(|| format!("{name} must be an absolute URL, got '{value}'"))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!("{name} must use http or https, got '{value}'");
            }
        }

        parse_origin(&self.origin)
            .with_context(|| format!("REDIRECT_ORIGIN is invalid: '{}'", self.origin))?;

        let catalog: StatusCodeCatalog = self
            .status_codes
            .parse()
            .context("REDIRECT_STATUS_CODES is invalid")?;

        if !catalog.contains(self.default_status_code) {
            anyhow::bail!(
                "REDIRECT_DEFAULT_STATUS_CODE {} is not listed in REDIRECT_STATUS_CODES",
                self.default_status_code
            );
        }

        anchored_pattern(&self.source_pattern)
            .context("REDIRECT_SOURCE_PATTERN does not compile")?;

        if self.display_utc_offset_minutes.abs() >= 24 * 60 {
            anyhow::bail!(
                "REDIRECT_DISPLAY_UTC_OFFSET_MINUTES must be within one day, got {}",
                self.display_utc_offset_minutes
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REDIRECT_REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Builds the immutable form context from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for the same conditions as [`Config::validate`].
    pub fn form_context(&self) -> Result<FormContext> {
        let display_offset = FixedOffset::east_opt(self.display_utc_offset_minutes * 60)
            .context("REDIRECT_DISPLAY_UTC_OFFSET_MINUTES is out of range")?;

        Ok(FormContext {
            csrf_token: self.csrf_token.clone(),
            actions: ActionUrls {
                create: self.create_url.clone(),
                update: self.update_url.clone(),
            },
            status_codes: self
                .status_codes
                .parse()
                .context("REDIRECT_STATUS_CODES is invalid")?,
            source_path_pattern: self.source_pattern.clone(),
            source_path_regex: anchored_pattern(&self.source_pattern)
                .context("REDIRECT_SOURCE_PATTERN does not compile")?,
            default_status_code: self.default_status_code,
            origin: parse_origin(&self.origin).context("REDIRECT_ORIGIN is invalid")?,
            display_offset,
        })
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Origin: {}", self.origin);
        tracing::info!("  Create action: {}", self.create_url);
        tracing::info!("  Update action: {}", self.update_url);
        tracing::info!("  CSRF token: {}", mask_secret(&self.csrf_token));

        if let Some(ref cookie) = self.session_cookie {
            tracing::info!("  Session cookie: {}", mask_cookie(cookie));
        } else {
            tracing::info!("  Session cookie: none");
        }

        tracing::info!("  Status codes: {}", self.status_codes);
        tracing::info!("  Default status code: {}", self.default_status_code);
        tracing::info!("  Display offset: {} min", self.display_utc_offset_minutes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Keeps the first four characters of a secret and masks the rest.
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

/// Masks cookie values while keeping the cookie names, e.g. `session=***; lang=***`.
fn mask_cookie(cookie: &str) -> String {
    cookie
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) => format!("{}=***", name.trim()),
            None => "***".to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
