//! Translation trait.

/// Looks up user-facing strings.
///
/// # Implementations
///
/// - [`crate::infrastructure::i18n::CatalogTranslator`] - Key/value catalog with fallbacks
pub trait Translator: Send + Sync {
    /// Returns the text for `key`, or `fallback` when the key is unknown.
    ///
    /// Implementations return the key itself when neither is available.
    fn translate(&self, key: &str, fallback: Option<&str>) -> String;
}
