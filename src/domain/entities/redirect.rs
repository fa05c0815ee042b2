//! Redirect entity as exchanged with the CMS backend.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// A single redirect rule.
///
/// `host: None` (or an empty host) means the redirect applies to any host.
/// Extra fields sent by the backend (creator, hit counter, ...) are ignored.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirect {
    #[serde(default)]
    pub host: Option<String>,
    pub source_uri_path: String,
    #[serde(default)]
    pub target_uri_path: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub status_code: u16,
    #[serde(default)]
    pub start_date_time: Option<String>,
    #[serde(default)]
    pub end_date_time: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Redirect {
    /// Creates a redirect without host, validity window or comment.
    pub fn new(
        source_uri_path: impl Into<String>,
        target_uri_path: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            host: None,
            source_uri_path: source_uri_path.into(),
            target_uri_path: target_uri_path.into(),
            status_code,
            start_date_time: None,
            end_date_time: None,
            comment: None,
        }
    }

    /// Returns the host, treating an empty string like an absent one.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref().filter(|h| !h.is_empty())
    }

    /// One-line description used in change lists: `host/source → target`.
    pub fn describe(&self) -> String {
        format!(
            "{}/{} → {}",
            self.host().unwrap_or(""),
            self.source_uri_path.trim_start_matches('/'),
            self.target_uri_path
        )
    }
}
