//! Helpers shared by the form: input clamping, URL resolution and datetime formats.
//!
//! - [`input_normalizer`] - Truncation of typed input and date picker values
//! - [`url_normalizer`] - Resolution of redirect paths against the origin
//! - [`datetime`] - Display and canonical timestamp formats

pub mod datetime;
pub mod input_normalizer;
pub mod url_normalizer;
