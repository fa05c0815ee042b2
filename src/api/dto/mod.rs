//! Data Transfer Objects for the redirect endpoint and the form display.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod form_view;
pub mod submit;

pub use form_view::{DatePickerView, FieldView, FormView, HelpTooltip, StatusCodeOption};
pub use submit::{ModuleArguments, SubmitRequest, SubmitResponse};
