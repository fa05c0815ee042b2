//! Normalization of raw field input before it reaches the draft.

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::draft::{DateField, DraftTransition, FieldEdit, TextField};
use crate::utils::datetime::format_readable;

/// Maximum number of characters kept for any free-text field.
pub const MAX_INPUT_LENGTH: usize = 255;

/// Value coming from a date picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Already formatted by the caller; taken verbatim. Empty clears the bound.
    Formatted(String),
    /// A concrete instant, rendered in the display format.
    Instant(DateTime<FixedOffset>),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        DateInput::Instant(instant)
    }
}

/// Cuts `raw` down to [`MAX_INPUT_LENGTH`] characters.
pub fn truncate_input(raw: &str) -> String {
    match raw.char_indices().nth(MAX_INPUT_LENGTH) {
        Some((byte_index, _)) => raw[..byte_index].to_string(),
        None => raw.to_string(),
    }
}

/// Builds the draft transition for a text field edit.
pub fn text_edit(field: TextField, raw: &str) -> DraftTransition {
    DraftTransition::FieldEdit(FieldEdit::Text(field, truncate_input(raw)))
}

/// Builds the draft transition for a date picker change.
pub fn date_edit(
    field: DateField,
    input: DateInput,
    display_offset: &FixedOffset,
) -> DraftTransition {
    let value = match input {
        DateInput::Formatted(value) => value,
        DateInput::Instant(instant) => format_readable(&instant, display_offset),
    };
    DraftTransition::DateEdit { field, value }
}
