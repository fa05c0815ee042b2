#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    routing::post,
};
use chrono::FixedOffset;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use redirect_editor::application::services::{FormCollaborators, RedirectFormService};
use redirect_editor::domain::entities::Redirect;
use redirect_editor::domain::repositories::RedirectListener;
use redirect_editor::infrastructure::i18n::CatalogTranslator;
use redirect_editor::infrastructure::notification::Notifier;
use redirect_editor::infrastructure::persistence::HttpRedirectRepository;
use redirect_editor::state::{ActionUrls, FormContext, anchored_pattern};
use redirect_editor::utils::url_normalizer::parse_origin;

/// A request received by [`MockEndpoint`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct EndpointState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    body: String,
}

/// Stand-in for the backend's create/update actions.
///
/// Accepts POSTs on any path, records them and answers with a fixed response.
pub struct MockEndpoint {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockEndpoint {
    pub async fn start(status: StatusCode, body: Value) -> Self {
        Self::start_raw(status, body.to_string()).await
    }

    pub async fn start_raw(status: StatusCode, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = EndpointState {
            requests: requests.clone(),
            status,
            body: body.into(),
        };

        let app = Router::new()
            .route("/{*path}", post(record))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<EndpointState>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        content_type: header_value(header::CONTENT_TYPE),
        cookie: header_value(header::COOKIE),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Returns a base URL nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn repository() -> HttpRedirectRepository {
    HttpRedirectRepository::new(Duration::from_secs(5), None).unwrap()
}

pub fn form_context(endpoint: &MockEndpoint) -> FormContext {
    form_context_at(&endpoint.base_url)
}

pub fn form_context_at(base_url: &str) -> FormContext {
    FormContext {
        csrf_token: "csrf-test-token".to_string(),
        actions: ActionUrls {
            create: format!("{base_url}/redirects/create"),
            update: format!("{base_url}/redirects/update"),
        },
        status_codes: "301,302,307,410".parse().unwrap(),
        source_path_pattern: r"[a-zA-Z0-9_\-/\.]+".to_string(),
        source_path_regex: anchored_pattern(r"[a-zA-Z0-9_\-/\.]+").unwrap(),
        default_status_code: 301,
        origin: parse_origin("https://www.example.org").unwrap(),
        display_offset: FixedOffset::east_opt(0).unwrap(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Ok(String),
    Warning(String, Option<String>),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notes: Mutex<Vec<Note>>,
}

impl RecordingNotifier {
    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn ok(&self, message: &str) {
        self.notes.lock().unwrap().push(Note::Ok(message.to_string()));
    }

    fn warning(&self, message: &str, detail: Option<&str>) {
        self.notes.lock().unwrap().push(Note::Warning(
            message.to_string(),
            detail.map(str::to_string),
        ));
    }

    fn error(&self, message: &str) {
        self.notes
            .lock()
            .unwrap()
            .push(Note::Error(message.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerCall {
    Created(Vec<Redirect>),
    Updated(Vec<Redirect>, Redirect),
    Cancel,
}

#[derive(Default)]
pub struct RecordingListener {
    calls: Mutex<Vec<ListenerCall>>,
}

impl RecordingListener {
    pub fn calls(&self) -> Vec<ListenerCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl RedirectListener for RecordingListener {
    fn on_created(&self, changed: &[Redirect]) {
        self.calls
            .lock()
            .unwrap()
            .push(ListenerCall::Created(changed.to_vec()));
    }

    fn on_updated(&self, changed: &[Redirect], original: &Redirect) {
        self.calls
            .lock()
            .unwrap()
            .push(ListenerCall::Updated(changed.to_vec(), original.clone()));
    }

    fn on_cancel(&self) {
        self.calls.lock().unwrap().push(ListenerCall::Cancel);
    }
}

pub struct TestForm {
    pub form: RedirectFormService<HttpRedirectRepository>,
    pub notifier: Arc<RecordingNotifier>,
    pub listener: Arc<RecordingListener>,
}

pub fn create_test_form(endpoint: &MockEndpoint, existing: Option<Redirect>) -> TestForm {
    create_test_form_at(&endpoint.base_url, existing)
}

pub fn create_test_form_at(base_url: &str, existing: Option<Redirect>) -> TestForm {
    let notifier = Arc::new(RecordingNotifier::default());
    let listener = Arc::new(RecordingListener::default());

    let form = RedirectFormService::new(
        Arc::new(repository()),
        Arc::new(form_context_at(base_url)),
        FormCollaborators {
            notifier: notifier.clone(),
            listener: listener.clone(),
            translator: Arc::new(CatalogTranslator::default()),
        },
        existing,
    );

    TestForm {
        form,
        notifier,
        listener,
    }
}
