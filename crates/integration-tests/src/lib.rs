//! Integration tests for the Yahrzeit client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p yahrzeit-integration-tests
//! ```
//!
//! Each test starts a [`StubServer`]: an `axum` router on an ephemeral local
//! port that serves the four endpoints under `/yahrzeit/`, records every
//! request and answers with canned responses. Handlers are driven through the
//! real `reqwest`-backed `ApiClient` and a [`RecordingPage`].

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use secrecy::SecretString;
use yahrzeit_client::{ApiClient, ClientConfig, Page};
use yahrzeit_core::CsrfToken;

/// Token the tests configure and expect to see echoed.
pub const TEST_CSRF_TOKEN: &str = "test-csrf-token-123";

/// A request as the stub server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Endpoint path with decoded values, e.g.
    /// `api/get-sunset-time/2024-03-01/Tel Aviv, Israel`.
    pub path: String,
    /// Path and query exactly as sent on the wire.
    pub raw_uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// What the stub answers for one endpoint.
#[derive(Debug, Clone)]
pub enum StubResponse {
    /// 200 with a JSON body.
    Json(serde_json::Value),
    /// Arbitrary status and raw body.
    Raw(StatusCode, String),
    /// 200 with a JSON body after a delay.
    Delayed(Duration, serde_json::Value),
}

#[derive(Default)]
struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<HashMap<String, StubResponse>>,
}

/// Local stand-in for the Yahrzeit server.
pub struct StubServer {
    base_url: String,
    state: Arc<StubState>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    /// Bind to an ephemeral port and start serving.
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());

        let api = Router::new()
            .route("/api/create-account", post(record_fixed))
            .route("/api/activate-res", post(record_fixed))
            .route("/api/save-res", post(record_fixed))
            .route("/api/get-sunset-time/{date}/{address}", get(record_sunset))
            .with_state(Arc::clone(&state));
        let app = Router::new().nest("/yahrzeit", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/yahrzeit/"),
            state,
            handle,
        }
    }

    /// Set the response for an endpoint path such as `api/save-res`.
    pub fn respond(&self, path: &str, response: StubResponse) -> &Self {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
        self
    }

    /// Shorthand for a 200 JSON response.
    pub fn respond_json(&self, path: &str, body: serde_json::Value) -> &Self {
        self.respond(path, StubResponse::Json(body))
    }

    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client configuration pointing at this server, with the test token.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::for_base_url(&self.base_url).unwrap();
        config.csrf_token = Some(SecretString::from(TEST_CSRF_TOKEN));
        config
    }

    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The token the stub configuration carries.
#[must_use]
pub fn csrf_token() -> CsrfToken {
    CsrfToken::parse(TEST_CSRF_TOKEN).unwrap()
}

async fn record_fixed(
    State(state): State<Arc<StubState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .trim_start_matches("/yahrzeit/")
        .to_string();
    respond(&state, method, path, uri.to_string(), headers, body).await
}

async fn record_sunset(
    State(state): State<Arc<StubState>>,
    Path((date, address)): Path<(String, String)>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = format!("api/get-sunset-time/{date}/{address}");
    respond(&state, method, path, uri.to_string(), headers, body).await
}

async fn respond(
    state: &StubState,
    method: Method,
    path: String,
    raw_uri: String,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let response = state.responses.lock().unwrap().get(&path).cloned();
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path,
        raw_uri,
        headers,
        body,
    });

    match response {
        Some(StubResponse::Json(value)) => axum::Json(value).into_response(),
        Some(StubResponse::Raw(status, body)) => (status, body).into_response(),
        Some(StubResponse::Delayed(delay, value)) => {
            tokio::time::sleep(delay).await;
            axum::Json(value).into_response()
        }
        None => (StatusCode::NOT_FOUND, "no stub response").into_response(),
    }
}

/// An effect a handler had on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Navigate(String),
    Alert(String),
    SetText(String, String),
    SetVisible(String, bool),
}

/// A [`Page`] that remembers everything done to it.
#[derive(Debug, Default)]
pub struct RecordingPage {
    events: Mutex<Vec<PageEvent>>,
}

impl RecordingPage {
    #[must_use]
    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().unwrap().clone()
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PageEvent::Navigate(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PageEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Last text set on `element_id`.
    #[must_use]
    pub fn text_of(&self, element_id: &str) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e {
            PageEvent::SetText(id, text) if id == element_id => Some(text),
            _ => None,
        })
    }

    /// Last visibility set on `element_id`.
    #[must_use]
    pub fn is_visible(&self, element_id: &str) -> Option<bool> {
        self.events().into_iter().rev().find_map(|e| match e {
            PageEvent::SetVisible(id, visible) if id == element_id => Some(visible),
            _ => None,
        })
    }

    fn push(&self, event: PageEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Page for RecordingPage {
    fn navigate(&self, path: &str) {
        self.push(PageEvent::Navigate(path.to_string()));
    }

    fn alert(&self, message: &str) {
        self.push(PageEvent::Alert(message.to_string()));
    }

    fn set_text(&self, element_id: &str, text: &str) {
        self.push(PageEvent::SetText(element_id.to_string(), text.to_string()));
    }

    fn set_visible(&self, element_id: &str, visible: bool) {
        self.push(PageEvent::SetVisible(element_id.to_string(), visible));
    }
}
