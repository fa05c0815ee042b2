//! Domain layer: redirect entities, the draft state and collaborator traits.
//!
//! # Architecture
//!
//! - [`entities`] - Redirect and status code data
//! - [`draft`] - The form's working copy and its transitions
//! - [`repositories`] - Persistence and callback trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure
//! - Drafts are values; each transition yields a new draft
//! - Orchestration lives in [`crate::application::services`]

pub mod draft;
pub mod entities;
pub mod repositories;
