//! Translation of labels and messages.
//!
//! Provides a [`Translator`] trait with a catalog-backed implementation.

mod catalog;
mod service;

pub use catalog::CatalogTranslator;
pub use service::Translator;
