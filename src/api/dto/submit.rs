//! DTOs for the redirect create/update endpoint.

use crate::domain::entities::Redirect;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body posted to the create or update action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct SubmitRequest {
    /// Anti-forgery token handed to the form by the backend.
    #[serde(rename = "__csrfToken")]
    pub csrf_token: String,

    #[serde(rename = "moduleArguments")]
    #[validate(nested)]
    pub module_arguments: ModuleArguments,
}

/// Redirect values as persisted by the backend.
///
/// `original_*` identify the record being edited even when the operator
/// changed its host or source path; both are `None` when creating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModuleArguments {
    pub original_host: Option<String>,
    pub original_source_uri_path: Option<String>,

    #[validate(length(max = 255))]
    pub host: String,

    #[validate(length(min = 1, max = 255))]
    pub source_uri_path: String,

    #[validate(length(min = 1, max = 255))]
    pub target_uri_path: String,

    pub status_code: u16,

    /// Canonical W3C timestamp, `None` when unbounded.
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,

    #[validate(length(max = 255))]
    pub comment: String,
}

/// Envelope returned by the endpoint.
///
/// On failure only `success` and `message` are guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    /// Every redirect touched by the change, the edited one included.
    ///
    /// Absent on failure. A success without it is malformed.
    #[serde(default)]
    pub changed_redirects: Option<Vec<Redirect>>,
}

impl SubmitResponse {
    pub fn succeeded(message: impl Into<String>, changed_redirects: Vec<Redirect>) -> Self {
        Self {
            success: true,
            message: message.into(),
            changed_redirects: Some(changed_redirects),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            changed_redirects: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn arguments() -> ModuleArguments {
        ModuleArguments {
            original_host: None,
            original_source_uri_path: None,
            host: String::new(),
            source_uri_path: "old".to_string(),
            target_uri_path: "/new".to_string(),
            status_code: 301,
            start_date_time: Some("2024-05-01T10:30:00+02:00".to_string()),
            end_date_time: None,
            comment: String::new(),
        }
    }

    #[test]
    fn test_request_wire_format() {
        let request = SubmitRequest {
            csrf_token: "token-123".to_string(),
            module_arguments: arguments(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "__csrfToken": "token-123",
                "moduleArguments": {
                    "originalHost": null,
                    "originalSourceUriPath": null,
                    "host": "",
                    "sourceUriPath": "old",
                    "targetUriPath": "/new",
                    "statusCode": 301,
                    "startDateTime": "2024-05-01T10:30:00+02:00",
                    "endDateTime": null,
                    "comment": ""
                }
            })
        );
    }

    #[test]
    fn test_ui_fields_are_not_sent() {
        let request = SubmitRequest {
            csrf_token: "t".to_string(),
            module_arguments: arguments(),
        };
        let value = serde_json::to_value(&request).unwrap();
        let arguments = value["moduleArguments"].as_object().unwrap();

        assert!(!arguments.contains_key("isSendingData"));
        assert!(!arguments.contains_key("activeHelpMessage"));
    }

    #[test]
    fn test_validation_bounds() {
        let mut args = arguments();
        assert!(args.validate().is_ok());

        args.comment = "x".repeat(256);
        assert!(args.validate().is_err());

        args.comment = String::new();
        args.source_uri_path = String::new();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_response_failure_shape() {
        let response: SubmitResponse =
            serde_json::from_str(r#"{"success": false, "message": "conflict"}"#).unwrap();

        assert_eq!(response, SubmitResponse::failed("conflict"));
    }

    #[test]
    fn test_response_success_shape() {
        let response: SubmitResponse = serde_json::from_str(
            r#"{
                "success": true,
                "message": "Redirect created",
                "changedRedirects": [
                    {"host": null, "sourceUriPath": "old", "targetUriPath": "new", "statusCode": 301}
                ]
            }"#,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(
            response.changed_redirects,
            Some(vec![Redirect::new("old", "new", 301)])
        );
    }

    #[test]
    fn test_response_success_without_changes_list() {
        let response: SubmitResponse =
            serde_json::from_str(r#"{"success": true, "message": "Redirect created"}"#).unwrap();

        assert!(response.success);
        assert_eq!(response.changed_redirects, None);
    }
}
