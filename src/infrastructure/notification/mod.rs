//! Notification surfaces for submission outcomes.
//!
//! Provides a [`Notifier`] trait with two implementations:
//! - [`ConsoleNotifier`] - Colored terminal output
//! - [`TracingNotifier`] - Log records for headless runs

mod console_notifier;
mod service;
mod tracing_notifier;

pub use console_notifier::ConsoleNotifier;
pub use service::Notifier;
pub use tracing_notifier::TracingNotifier;
