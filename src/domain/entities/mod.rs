//! Core domain entities.
//!
//! - [`Redirect`] - A redirect rule as stored by the backend
//! - [`StatusCodeCatalog`] - The status codes an operator may choose from

pub mod redirect;
pub mod status_code;

pub use redirect::Redirect;
pub use status_code::{
    I18N_MARKER, StatusCodeCatalog, StatusCodeCatalogError, StatusCodeLabel, supports_target,
};
