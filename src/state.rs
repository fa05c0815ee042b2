use chrono::FixedOffset;
use regex::Regex;
use url::Url;

use crate::domain::draft::{DraftDefaults, FormMode};
use crate::domain::entities::StatusCodeCatalog;

/// Endpoint URLs for the two submission modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionUrls {
    pub create: String,
    pub update: String,
}

impl ActionUrls {
    pub fn for_mode(&self, mode: FormMode) -> &str {
        match mode {
            FormMode::Create => &self.create,
            FormMode::Update => &self.update,
        }
    }
}

/// Values the backend hands to a form instance. Immutable for its lifetime.
#[derive(Debug, Clone)]
pub struct FormContext {
    pub csrf_token: String,
    pub actions: ActionUrls,
    pub status_codes: StatusCodeCatalog,
    /// Pattern as configured, shown to the operator.
    pub source_path_pattern: String,
    /// Anchored version of `source_path_pattern`: the whole path must match.
    pub source_path_regex: Regex,
    pub default_status_code: u16,
    /// Origin serving the form; base for path resolution and the "current host".
    pub origin: Url,
    pub display_offset: FixedOffset,
}

impl FormContext {
    pub fn defaults(&self) -> DraftDefaults {
        DraftDefaults {
            status_code: self.default_status_code,
        }
    }
}

/// Wraps `pattern` so that it must match the whole input, like an HTML `pattern` attribute.
pub fn anchored_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}
