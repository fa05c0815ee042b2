//! Translator backed by a flat JSON catalog.

use std::collections::HashMap;
use std::path::Path;

use super::service::Translator;
use crate::error::FormError;
use tracing::debug;

/// Translator reading from a `{"key": "text"}` catalog.
///
/// An empty catalog turns every lookup into its fallback, which is what the
/// form shows when no translations are configured.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parses a JSON catalog.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Configuration`] if the document is not a flat
    /// object of strings.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let entries: HashMap<String, String> = serde_json::from_str(json).map_err(|e| {
            FormError::configuration(format!("Invalid translation catalog: {e}"))
        })?;
        debug!("Loaded {} translations", entries.len());
        Ok(Self::new(entries))
    }

    /// Reads and parses a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Configuration`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            FormError::configuration(format!(
                "Cannot read translation catalog {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        self.entries
            .get(key)
            .cloned()
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(|| key.to_string())
    }
}
