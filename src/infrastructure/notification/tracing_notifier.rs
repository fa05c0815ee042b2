//! Notification surface that only writes log records.

use super::service::Notifier;
use tracing::{error, info, warn};

/// Forwards notifications to `tracing`.
///
/// Used when the editor runs without a terminal, e.g. with `LOG_FORMAT=json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn ok(&self, message: &str) {
        info!(notification = "ok", "{}", message);
    }

    fn warning(&self, message: &str, detail: Option<&str>) {
        warn!(notification = "warning", detail = detail.unwrap_or(""), "{}", message);
    }

    fn error(&self, message: &str) {
        error!(notification = "error", "{}", message);
    }
}
