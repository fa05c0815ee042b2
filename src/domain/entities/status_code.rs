//! Enumerated set of redirect status codes offered by the form.

use std::fmt;
use std::str::FromStr;

/// Label value meaning "resolve through the translator".
pub const I18N_MARKER: &str = "i18n";

/// Returns true if a redirect with this status code points somewhere.
///
/// Client error codes (e.g. `410 Gone`) mark removed content and carry no target.
pub fn supports_target(status_code: u16) -> bool {
    !(400..500).contains(&status_code)
}

/// How a status code is presented to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCodeLabel {
    /// Label and tooltip come from `statusCodes.<code>.label` / `.tooltip`.
    Translated,
    /// Used verbatim as label and tooltip.
    Literal(String),
}

/// Ordered set of status codes the operator may choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCodeCatalog {
    entries: Vec<(u16, StatusCodeLabel)>,
}

impl StatusCodeCatalog {
    pub fn new(entries: Vec<(u16, StatusCodeLabel)>) -> Self {
        Self { entries }
    }

    pub fn contains(&self, status_code: u16) -> bool {
        self.entries.iter().any(|(code, _)| *code == status_code)
    }

    pub fn entries(&self) -> &[(u16, StatusCodeLabel)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StatusCodeCatalog {
    fn default() -> Self {
        Self::new(
            [301, 302, 303, 307, 308, 410]
                .into_iter()
                .map(|code| (code, StatusCodeLabel::Translated))
                .collect(),
        )
    }
}

/// Errors when parsing a catalog definition such as `301=i18n,410=Gone`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatusCodeCatalogError {
    #[error("Invalid status code '{0}'")]
    InvalidCode(String),

    #[error("Status code {0} is listed twice")]
    Duplicate(u16),

    #[error("Status code list is empty")]
    Empty,
}

impl FromStr for StatusCodeCatalog {
    type Err = StatusCodeCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries: Vec<(u16, StatusCodeLabel)> = Vec::new();

        for item in s.split(',').map(str::trim).filter(|i| !i.is_empty()) {
            let (code, label) = match item.split_once('=') {
                Some((code, label)) => (code.trim(), label.trim()),
                None => (item, I18N_MARKER),
            };

            let code: u16 = code
                .parse()
                .ok()
                .filter(|c| (100..600).contains(c))
                .ok_or_else(|| StatusCodeCatalogError::InvalidCode(code.to_string()))?;

            if entries.iter().any(|(existing, _)| *existing == code) {
                return Err(StatusCodeCatalogError::Duplicate(code));
            }

            let label = if label.is_empty() || label == I18N_MARKER {
                StatusCodeLabel::Translated
            } else {
                StatusCodeLabel::Literal(label.to_string())
            };
            entries.push((code, label));
        }

        if entries.is_empty() {
            return Err(StatusCodeCatalogError::Empty);
        }

        Ok(Self::new(entries))
    }
}

impl fmt::Display for StatusCodeCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(code, label)| match label {
                StatusCodeLabel::Translated => format!("{code}={I18N_MARKER}"),
                StatusCodeLabel::Literal(text) => format!("{code}={text}"),
            })
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_target() {
        assert!(supports_target(301));
        assert!(supports_target(302));
        assert!(supports_target(307));
        assert!(supports_target(308));
        assert!(!supports_target(404));
        assert!(!supports_target(410));
        assert!(!supports_target(451));
    }

    #[test]
    fn test_parse_catalog() {
        let catalog: StatusCodeCatalog = "301=i18n, 302 ,410=Gone".parse().unwrap();

        assert_eq!(
            catalog.entries(),
            &[
                (301, StatusCodeLabel::Translated),
                (302, StatusCodeLabel::Translated),
                (410, StatusCodeLabel::Literal("Gone".to_string())),
            ]
        );
        assert!(catalog.contains(410));
        assert!(!catalog.contains(307));
    }

    #[test]
    fn test_parse_catalog_errors() {
        assert_eq!(
            "abc".parse::<StatusCodeCatalog>(),
            Err(StatusCodeCatalogError::InvalidCode("abc".to_string()))
        );
        assert_eq!(
            "301,301".parse::<StatusCodeCatalog>(),
            Err(StatusCodeCatalogError::Duplicate(301))
        );
        assert_eq!(
            "  , ".parse::<StatusCodeCatalog>(),
            Err(StatusCodeCatalogError::Empty)
        );
        assert!("42".parse::<StatusCodeCatalog>().is_err());
    }

    #[test]
    fn test_display_matches_parse_input() {
        let catalog: StatusCodeCatalog = "301=i18n,410=Gone".parse().unwrap();
        assert_eq!(catalog.to_string(), "301=i18n,410=Gone");
    }

    #[test]
    fn test_default_catalog() {
        let catalog = StatusCodeCatalog::default();
        assert!(catalog.contains(301));
        assert!(catalog.contains(410));
        assert!(!catalog.is_empty());
    }
}
