//! Conversions between the date picker's display format and the canonical
//! timestamp sent to the backend.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

/// Format shown in the date picker, e.g. `2024-05-01 10:30`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// W3C datetime with seconds and numeric offset, e.g. `2024-05-01T10:30:00+02:00`.
pub const W3C_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Naive formats accepted for values typed by hand or stored by the backend.
const NAIVE_FORMATS: &[&str] = &[
    DISPLAY_FORMAT,
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Errors that can occur while reading a datetime value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Unrecognized date '{0}'")]
    Unrecognized(String),

    #[error("Date '{0}' does not exist in the display time zone")]
    Nonexistent(String),
}

/// Renders an instant in the display format, in the display time zone.
pub fn format_readable<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    display_offset: &FixedOffset,
) -> String {
    instant
        .with_timezone(display_offset)
        .format(DISPLAY_FORMAT)
        .to_string()
}

/// Reads a draft datetime value.
///
/// Values carrying an offset (RFC 3339) keep it; naive values are interpreted
/// in the display time zone.
///
/// # Errors
///
/// Returns [`DateTimeError::Unrecognized`] if no supported format matches.
pub fn parse_draft_datetime(
    value: &str,
    display_offset: &FixedOffset,
) -> Result<DateTime<FixedOffset>, DateTimeError> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| DateTimeError::Unrecognized(value.to_string()))?;

    display_offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| DateTimeError::Nonexistent(value.to_string()))
}

/// Converts a draft datetime into the canonical exchange format.
///
/// Empty values mean "no bound" and yield `None`.
///
/// # Errors
///
/// See [`parse_draft_datetime`].
pub fn to_w3c(value: &str, display_offset: &FixedOffset) -> Result<Option<String>, DateTimeError> {
    if value.trim().is_empty() {
        return Ok(None);
    }

    let parsed = parse_draft_datetime(value, display_offset)?;
    Ok(Some(parsed.format(W3C_FORMAT).to_string()))
}
