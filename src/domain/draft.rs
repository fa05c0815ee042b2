//! Working copy of a redirect while it is being edited.
//!
//! A [`Draft`] never changes in place: every logical change is described by a
//! [`DraftTransition`] and [`Draft::apply`] returns the next value.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::entities::{Redirect, supports_target};

/// Whether the form creates a new redirect or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Update,
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::Create => write!(f, "create"),
            FormMode::Update => write!(f, "update"),
        }
    }
}

/// Values a fresh draft starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftDefaults {
    pub status_code: u16,
}

/// Free-text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Host,
    SourceUriPath,
    TargetUriPath,
    Comment,
}

impl TextField {
    pub fn name(&self) -> &'static str {
        match self {
            TextField::Host => "host",
            TextField::SourceUriPath => "sourceUriPath",
            TextField::TargetUriPath => "targetUriPath",
            TextField::Comment => "comment",
        }
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host" => Ok(TextField::Host),
            "sourceUriPath" | "source" => Ok(TextField::SourceUriPath),
            "targetUriPath" | "target" => Ok(TextField::TargetUriPath),
            "comment" => Ok(TextField::Comment),
            other => Err(format!("Unknown text field '{other}'")),
        }
    }
}

/// Bounds of the validity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn name(&self) -> &'static str {
        match self {
            DateField::Start => "startDateTime",
            DateField::End => "endDateTime",
        }
    }
}

/// A single typed field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Text(TextField, String),
    StatusCode(u16),
}

/// Every state change a draft can go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftTransition {
    /// Start over from defaults, or from an existing redirect when given.
    Init { existing: Option<Redirect> },
    FieldEdit(FieldEdit),
    /// `value` is the display string; empty clears the bound.
    DateEdit { field: DateField, value: String },
    /// Opens the tooltip `identifier`, or closes it when it is already open.
    HelpToggle(String),
    SubmitStart,
    SubmitSuccess(FormMode),
    SubmitFailure,
}

/// The form's current redirect values plus transient UI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub host: String,
    pub source_uri_path: String,
    pub target_uri_path: String,
    pub status_code: u16,
    pub start_date_time: String,
    pub end_date_time: String,
    pub comment: String,
    pub is_sending_data: bool,
    pub active_help_message: Option<String>,
}

impl Draft {
    /// Empty draft for creating a new redirect.
    pub fn from_defaults(defaults: &DraftDefaults) -> Self {
        Self {
            host: String::new(),
            source_uri_path: String::new(),
            target_uri_path: String::new(),
            status_code: defaults.status_code,
            start_date_time: String::new(),
            end_date_time: String::new(),
            comment: String::new(),
            is_sending_data: false,
            active_help_message: None,
        }
    }

    /// Draft pre-filled with the values of an existing redirect.
    pub fn from_redirect(redirect: &Redirect) -> Self {
        Self {
            host: redirect.host.clone().unwrap_or_default(),
            source_uri_path: redirect.source_uri_path.clone(),
            target_uri_path: redirect.target_uri_path.clone(),
            status_code: redirect.status_code,
            start_date_time: redirect.start_date_time.clone().unwrap_or_default(),
            end_date_time: redirect.end_date_time.clone().unwrap_or_default(),
            comment: redirect.comment.clone().unwrap_or_default(),
            is_sending_data: false,
            active_help_message: None,
        }
    }

    pub fn init(defaults: &DraftDefaults, existing: Option<&Redirect>) -> Self {
        match existing {
            Some(redirect) => Self::from_redirect(redirect),
            None => Self::from_defaults(defaults),
        }
    }

    /// Returns the draft that results from `transition`.
    pub fn apply(&self, transition: DraftTransition, defaults: &DraftDefaults) -> Self {
        match transition {
            DraftTransition::Init { existing } => Self::init(defaults, existing.as_ref()),
            DraftTransition::FieldEdit(FieldEdit::Text(field, value)) => {
                let mut next = self.clone();
                match field {
                    TextField::Host => next.host = value,
                    TextField::SourceUriPath => next.source_uri_path = value,
                    TextField::TargetUriPath => next.target_uri_path = value,
                    TextField::Comment => next.comment = value,
                }
                next
            }
            DraftTransition::FieldEdit(FieldEdit::StatusCode(status_code)) => Self {
                status_code,
                ..self.clone()
            },
            DraftTransition::DateEdit { field, value } => {
                let mut next = self.clone();
                match field {
                    DateField::Start => next.start_date_time = value,
                    DateField::End => next.end_date_time = value,
                }
                next
            }
            DraftTransition::HelpToggle(identifier) => {
                let active_help_message = match &self.active_help_message {
                    Some(active) if *active == identifier => None,
                    _ => Some(identifier),
                };
                Self {
                    active_help_message,
                    ..self.clone()
                }
            }
            DraftTransition::SubmitStart => Self {
                is_sending_data: true,
                ..self.clone()
            },
            DraftTransition::SubmitSuccess(FormMode::Create) => Self::from_defaults(defaults),
            DraftTransition::SubmitSuccess(FormMode::Update) | DraftTransition::SubmitFailure => {
                Self {
                    is_sending_data: false,
                    ..self.clone()
                }
            }
        }
    }

    pub fn supports_target(&self) -> bool {
        supports_target(self.status_code)
    }

    /// Target as it is persisted: `/` for codes without a target.
    pub fn effective_target(&self) -> &str {
        if self.supports_target() {
            &self.target_uri_path
        } else {
            "/"
        }
    }

    /// The redirect fields of this draft, without UI flags.
    pub fn to_redirect(&self) -> Redirect {
        fn non_empty(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_string())
        }

        Redirect {
            host: non_empty(&self.host),
            source_uri_path: self.source_uri_path.clone(),
            target_uri_path: self.target_uri_path.clone(),
            status_code: self.status_code,
            start_date_time: non_empty(&self.start_date_time),
            end_date_time: non_empty(&self.end_date_time),
            comment: non_empty(&self.comment),
        }
    }
}
