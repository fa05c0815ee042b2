//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces the form depends on, providing
//! concrete implementations for persistence, notification and translation.
//!
//! # Modules
//!
//! - [`persistence`] - JSON-over-HTTP redirect endpoint
//! - [`notification`] - Terminal and log notification surfaces
//! - [`i18n`] - Translation catalog

pub mod i18n;
pub mod notification;
pub mod persistence;
