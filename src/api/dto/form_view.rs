//! Display projection of the redirect form.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::domain::draft::{DateField, Draft, FormMode, TextField};
use crate::domain::entities::StatusCodeLabel;
use crate::infrastructure::i18n::Translator;
use crate::state::FormContext;
use crate::utils::datetime::parse_draft_datetime;
use crate::utils::input_normalizer::MAX_INPUT_LENGTH;

/// Identifier of the help tooltip next to the source path.
pub const SOURCE_PATH_HELP: &str = "sourceUriPath";

/// A text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub required: bool,
    pub max_length: usize,
}

/// One entry of the status code selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCodeOption {
    pub code: u16,
    pub label: String,
    pub tooltip: String,
    pub selected: bool,
}

/// A date picker. `selected` is `None` for empty or unreadable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerView {
    pub name: &'static str,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub selected: Option<DateTime<FixedOffset>>,
}

/// The open help tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpTooltip {
    pub identifier: String,
    pub caption: String,
}

/// Everything needed to render the form for the current draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub mode: FormMode,
    pub host: FieldView,
    pub source_uri_path: FieldView,
    /// Pattern the source path must match, shown as input hint.
    pub source_uri_path_pattern: String,
    /// `None` when the selected status code carries no target.
    pub target_uri_path: Option<FieldView>,
    pub status_code_label: String,
    pub status_codes: Vec<StatusCodeOption>,
    pub start_date_time: DatePickerView,
    pub end_date_time: DatePickerView,
    pub comment: FieldView,
    pub help_tooltip: Option<HelpTooltip>,
    pub submit_label: String,
    pub submit_disabled: bool,
    pub show_cancel: bool,
}

impl FormView {
    pub fn new(
        draft: &Draft,
        mode: FormMode,
        context: &FormContext,
        translator: &dyn Translator,
    ) -> Self {
        let text = |field: TextField, value: &str, placeholder: String, required: bool| {
            FieldView {
                name: field.name(),
                label: translator.translate(field.name(), None),
                value: value.to_string(),
                placeholder,
                required,
                max_length: MAX_INPUT_LENGTH,
            }
        };

        let date = |field: DateField, value: &str| DatePickerView {
            name: field.name(),
            label: translator.translate(field.name(), None),
            value: value.to_string(),
            placeholder: translator.translate(&format!("{}.placeholder", field.name()), None),
            selected: Some(value)
                .filter(|v| !v.trim().is_empty())
                .and_then(|v| parse_draft_datetime(v, &context.display_offset).ok()),
        };

        let status_codes = context
            .status_codes
            .entries()
            .iter()
            .map(|(code, label)| {
                let (label, tooltip) = match label {
                    StatusCodeLabel::Translated => (
                        translator.translate(&format!("statusCodes.{code}.label"), None),
                        translator.translate(&format!("statusCodes.{code}.tooltip"), None),
                    ),
                    StatusCodeLabel::Literal(text) => (text.clone(), text.clone()),
                };
                StatusCodeOption {
                    code: *code,
                    label,
                    tooltip,
                    selected: *code == draft.status_code,
                }
            })
            .collect();

        let help_tooltip = draft
            .active_help_message
            .as_deref()
            .filter(|identifier| *identifier == SOURCE_PATH_HELP)
            .map(|identifier| HelpTooltip {
                identifier: identifier.to_string(),
                caption: translator
                    .translate("sourceUriPath.help", Some("Explanation of the source path")),
            });

        let submit_label = match mode {
            FormMode::Update => translator.translate("action.update", Some("Update redirect")),
            FormMode::Create => translator.translate("action.create", Some("Add redirect")),
        };

        Self {
            mode,
            host: text(TextField::Host, &draft.host, "www.example.org".into(), false),
            source_uri_path: text(
                TextField::SourceUriPath,
                &draft.source_uri_path,
                "the-old-url/product-a".into(),
                true,
            ),
            source_uri_path_pattern: context.source_path_pattern.clone(),
            target_uri_path: draft.supports_target().then(|| {
                text(
                    TextField::TargetUriPath,
                    &draft.target_uri_path,
                    "(https://)the-new-url/product-a".into(),
                    true,
                )
            }),
            status_code_label: translator.translate("statusCode", None),
            status_codes,
            start_date_time: date(DateField::Start, &draft.start_date_time),
            end_date_time: date(DateField::End, &draft.end_date_time),
            comment: text(
                TextField::Comment,
                &draft.comment,
                translator.translate("comment.placeholder", None),
                false,
            ),
            help_tooltip,
            submit_label,
            submit_disabled: draft.is_sending_data,
            show_cancel: mode == FormMode::Update,
        }
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
    use chrono::TimeZone;

    fn context() -> FormContext {
        FormContext {
            csrf_token: "token".to_string(),
            actions: ActionUrls {
                create: "https://www.example.org/create".to_string(),
                update: "https://www.example.org/update".to_string(),
            },
            status_codes: "301,410=Gone".parse::<StatusCodeCatalog>().unwrap(),
            source_path_pattern: "[a-z/]+".to_string(),
            source_path_regex: anchored_pattern("[a-z/]+").unwrap(),
            default_status_code: 301,
            origin: parse_origin("https://www.example.org").unwrap(),
            display_offset: FixedOffset::east_opt(3600).unwrap(),
        }
    }

    fn translator() -> CatalogTranslator {
        CatalogTranslator::from_json(
            r#"{
                "statusCodes.301.label": "Moved permanently",
                "statusCodes.301.tooltip": "Permanent redirect",
                "action.create": "Weiterleitung anlegen"
            }"#,
        )
        .unwrap()
    }

    fn draft(status_code: u16) -> Draft {
        Draft::from_defaults(&DraftDefaults { status_code })
    }

    #[test]
    fn test_status_code_options() {
        let view = FormView::new(&draft(410), FormMode::Create, &context(), &translator());

        assert_eq!(
            view.status_codes,
            vec![
                StatusCodeOption {
                    code: 301,
                    label: "Moved permanently".to_string(),
                    tooltip: "Permanent redirect".to_string(),
                    selected: false,
                },
                StatusCodeOption {
                    code: 410,
                    label: "Gone".to_string(),
                    tooltip: "Gone".to_string(),
                    selected: true,
                },
            ]
        );
    }

    #[test]
    fn test_target_hidden_for_codes_without_target() {
        let ctx = context();
        let translator = translator();

        assert!(FormView::new(&draft(301), FormMode::Create, &ctx, &translator)
            .target_uri_path
            .is_some());
        assert!(FormView::new(&draft(410), FormMode::Create, &ctx, &translator)
            .target_uri_path
            .is_none());
    }

    #[test]
    fn test_submit_and_cancel_depend_on_mode() {
        let ctx = context();
        let translator = translator();

        let create = FormView::new(&draft(301), FormMode::Create, &ctx, &translator);
        assert_eq!(create.submit_label, "Weiterleitung anlegen");
        assert!(!create.show_cancel);

        let mut sending = draft(301);
        sending.is_sending_data = true;
        let update = FormView::new(&sending, FormMode::Update, &ctx, &translator);
        assert_eq!(update.submit_label, "Update redirect");
        assert!(update.show_cancel);
        assert!(update.submit_disabled);
    }

    #[test]
    fn test_help_tooltip() {
        let mut current = draft(301);
        let view = FormView::new(&current, FormMode::Create, &context(), &translator());
        assert!(view.help_tooltip.is_none());

        current.active_help_message = Some(SOURCE_PATH_HELP.to_string());
        let view = FormView::new(&current, FormMode::Create, &context(), &translator());
        assert_eq!(
            view.help_tooltip.map(|t| t.caption).as_deref(),
            Some("Explanation of the source path")
        );
    }

    #[test]
    fn test_date_pickers_are_parsed_in_display_offset() {
        let mut current = draft(301);
        current.start_date_time = "2024-05-01 10:30".to_string();
        current.end_date_time = "whenever".to_string();

        let view = FormView::new(&current, FormMode::Create, &context(), &translator());

        let expected = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 10, 30, 0)
            .unwrap();
        assert_eq!(view.start_date_time.selected, Some(expected));
        assert_eq!(view.end_date_time.selected, None);
        assert_eq!(view.end_date_time.value, "whenever");
        assert_eq!(view.start_date_time.placeholder, "startDateTime.placeholder");
    }

    #[test]
    fn test_source_field_carries_pattern_and_bounds() {
        let view = FormView::new(&draft(301), FormMode::Create, &context(), &translator());

        assert!(view.source_uri_path.required);
        assert_eq!(view.source_uri_path.max_length, MAX_INPUT_LENGTH);
        assert_eq!(view.source_uri_path_pattern, "[a-z/]+");
        assert!(!view.host.required);
        assert_eq!(view.host.placeholder, "www.example.org");
    }
}
