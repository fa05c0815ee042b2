//! Pre-submission checks on a redirect draft.

use std::sync::Arc;

use tracing::debug;

use crate::domain::draft::{DateField, Draft};
use crate::infrastructure::i18n::Translator;
use crate::state::FormContext;
use crate::utils::url_normalizer::{denotes_same_path, is_current_host};

/// Reason a draft cannot be submitted.
///
/// The display text is the English fallback; [`ValidationFailure::translate`]
/// resolves the operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("The source path is required")]
    MissingSource,

    #[error("The source path must match the pattern {pattern}")]
    SourcePatternMismatch { pattern: String },

    #[error("The target path is required")]
    MissingTarget,

    #[error("The status code {0} is not available")]
    UnknownStatusCode(u16),

    #[error("The source and target paths cannot be the same")]
    SameSourceAndTarget,

    #[error("The path '{path}' cannot be resolved")]
    UnresolvablePath { path: String },

    #[error("The date '{value}' is not valid")]
    InvalidDate { field: DateField, value: String },

    #[error("The value of {field} is not valid")]
    InvalidField { field: String },
}

impl ValidationFailure {
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::MissingSource => "error.sourceUriPathRequired",
            Self::SourcePatternMismatch { .. } => "error.sourceUriPathPattern",
            Self::MissingTarget => "error.targetUriPathRequired",
            Self::UnknownStatusCode(_) => "error.unknownStatusCode",
            Self::SameSourceAndTarget => "error.sameSourceAndTarget",
            Self::UnresolvablePath { .. } => "error.unresolvablePath",
            Self::InvalidDate { .. } => "error.invalidDate",
            Self::InvalidField { .. } => "error.invalidField",
        }
    }

    /// Operator-facing message, falling back to the English text.
    pub fn translate(&self, translator: &dyn Translator) -> String {
        translator.translate(self.translation_key(), Some(&self.to_string()))
    }
}

/// Checks a draft before it is sent.
///
/// These checks guide the operator; the backend validates again and remains
/// authoritative.
pub struct RedirectValidator {
    context: Arc<FormContext>,
}

impl RedirectValidator {
    pub fn new(context: Arc<FormContext>) -> Self {
        Self { context }
    }

    /// Runs all checks in the order the form reports them.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self, draft: &Draft) -> Result<(), ValidationFailure> {
        let source = draft.source_uri_path.trim();
        if source.is_empty() {
            return Err(ValidationFailure::MissingSource);
        }

        if !self.context.source_path_regex.is_match(&draft.source_uri_path) {
            return Err(ValidationFailure::SourcePatternMismatch {
                pattern: self.context.source_path_pattern.clone(),
            });
        }

        if !self.context.status_codes.contains(draft.status_code) {
            return Err(ValidationFailure::UnknownStatusCode(draft.status_code));
        }

        if draft.supports_target() && draft.target_uri_path.trim().is_empty() {
            return Err(ValidationFailure::MissingTarget);
        }

        self.check_self_redirect(draft)
    }

    /// Rejects redirects whose source and target are the same path on the
    /// current host.
    ///
    /// Skipped when the redirect is bound to another host. Status codes without
    /// a target are checked against the target field all the same.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure::SameSourceAndTarget`] for a self-redirect and
    /// [`ValidationFailure::UnresolvablePath`] if a path cannot be resolved.
    pub fn check_self_redirect(&self, draft: &Draft) -> Result<(), ValidationFailure> {
        if !is_current_host(&draft.host, &self.context.origin) {
            debug!(
                "Skipping same-path check for foreign host '{}'",
                draft.host.trim()
            );
            return Ok(());
        }

        let same = denotes_same_path(
            &draft.source_uri_path,
            &draft.target_uri_path,
            &self.context.origin,
        )
        .map_err(|e| {
            debug!("Path resolution failed: {}", e);
            ValidationFailure::UnresolvablePath {
                path: draft.target_uri_path.clone(),
            }
        })?;

        if same {
            return Err(ValidationFailure::SameSourceAndTarget);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::DraftDefaults;
    use crate::domain::entities::StatusCodeCatalog;
    use crate::infrastructure::i18n::CatalogTranslator;
    use crate::state::{ActionUrls, anchored_pattern};
    use crate::utils::url_normalizer::parse_origin;
    use chrono::FixedOffset;

    fn context() -> Arc<FormContext> {
        Arc::new(FormContext {
            csrf_token: "token".to_string(),
            actions: ActionUrls {
                create: "https://www.example.org/create".to_string(),
                update: "https://www.example.org/update".to_string(),
            },
            status_codes: "301,307,410".parse::<StatusCodeCatalog>().unwrap(),
            source_path_pattern: r"[a-z0-9\-/]+".to_string(),
            source_path_regex: anchored_pattern(r"[a-z0-9\-/]+").unwrap(),
            default_status_code: 301,
            origin: parse_origin("https://www.example.org").unwrap(),
            display_offset: FixedOffset::east_opt(0).unwrap(),
        })
    }

    fn draft(host: &str, source: &str, target: &str, status_code: u16) -> Draft {
        let mut draft = Draft::from_defaults(&DraftDefaults { status_code });
        draft.host = host.to_string();
        draft.source_uri_path = source.to_string();
        draft.target_uri_path = target.to_string();
        draft
    }

    #[test]
    fn test_valid_draft() {
        let validator = RedirectValidator::new(context());
        assert_eq!(validator.validate(&draft("", "old", "new", 301)), Ok(()));
    }

    #[test]
    fn test_missing_source() {
        let validator = RedirectValidator::new(context());
        assert_eq!(
            validator.validate(&draft("", "", "new", 301)),
            Err(ValidationFailure::MissingSource)
        );
    }

    #[test]
    fn test_source_must_match_whole_pattern() {
        let validator = RedirectValidator::new(context());
        assert!(matches!(
            validator.validate(&draft("", "old page", "new", 301)),
            Err(ValidationFailure::SourcePatternMismatch { .. })
        ));
        assert!(matches!(
            validator.validate(&draft("", "Old", "new", 301)),
            Err(ValidationFailure::SourcePatternMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_status_code() {
        let validator = RedirectValidator::new(context());
        assert_eq!(
            validator.validate(&draft("", "old", "new", 302)),
            Err(ValidationFailure::UnknownStatusCode(302))
        );
    }

    #[test]
    fn test_target_required_only_for_target_codes() {
        let validator = RedirectValidator::new(context());
        assert_eq!(
            validator.validate(&draft("", "old", "  ", 301)),
            Err(ValidationFailure::MissingTarget)
        );
        assert_eq!(validator.validate(&draft("", "old", "", 410)), Ok(()));
    }

    #[test]
    fn test_same_path_blocked_without_host() {
        let validator = RedirectValidator::new(context());
        for (source, target) in [
            ("page", "page"),
            ("page", "/page"),
            ("page", "/page?ref=1"),
            ("a/b", "/a/x/../b"),
        ] {
            assert_eq!(
                validator.validate(&draft("", source, target, 301)),
                Err(ValidationFailure::SameSourceAndTarget),
                "{source} -> {target}"
            );
        }
    }

    #[test]
    fn test_same_path_blocked_on_current_host() {
        let validator = RedirectValidator::new(context());
        assert_eq!(
            validator.validate(&draft("www.example.org", "page", "/page", 307)),
            Err(ValidationFailure::SameSourceAndTarget)
        );
    }

    #[test]
    fn test_same_path_allowed_on_other_host() {
        let validator = RedirectValidator::new(context());
        assert_eq!(
            validator.validate(&draft("shop.example.org", "page", "/page", 301)),
            Ok(())
        );
    }

    #[test]
    fn test_same_path_blocked_for_gone() {
        let validator = RedirectValidator::new(context());
        assert_eq!(
            validator.validate(&draft("", "page", "page", 410)),
            Err(ValidationFailure::SameSourceAndTarget)
        );
        assert_eq!(validator.validate(&draft("", "page", "", 410)), Ok(()));
    }

    #[test]
    fn test_same_path_blocked_for_absolute_target_on_other_origin() {
        let validator = RedirectValidator::new(context());
        assert_eq!(
            validator.validate(&draft("", "page", "https://other.example.org/page", 301)),
            Err(ValidationFailure::SameSourceAndTarget)
        );
    }

    #[test]
    fn test_translated_message() {
        let translator = CatalogTranslator::from_json(
            r#"{"error.sameSourceAndTarget": "Quelle und Ziel dürfen nicht gleich sein"}"#,
        )
        .unwrap();

        assert_eq!(
            ValidationFailure::SameSourceAndTarget.translate(&translator),
            "Quelle und Ziel dürfen nicht gleich sein"
        );
        assert_eq!(
            ValidationFailure::MissingTarget.translate(&translator),
            "The target path is required"
        );
    }
}
