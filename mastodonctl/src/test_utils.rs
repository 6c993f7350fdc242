//! Test utilities for client testing
//!
//! Provides a mock Mastodon server that serves canned payloads and records the
//! last request it received.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// What the mock server saw in the last request
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    /// Request path without query string
    pub path: String,
    /// Decoded query parameters
    pub query: HashMap<String, String>,
    /// `Authorization` header, if sent
    pub authorization: Option<String>,
    /// `Content-Type` header, if sent
    pub content_type: Option<String>,
}

/// Mock server state
#[derive(Debug, Clone, Default)]
pub struct MockServerState {
    /// Delay applied before every response
    pub delay: Option<Duration>,
    last_request: Arc<Mutex<RecordedRequest>>,
}

impl MockServerState {
    /// The last request received by the server
    pub fn last_request(&self) -> RecordedRequest {
        self.last_request.lock().unwrap().clone()
    }

    async fn record(&self, uri: &Uri, query: HashMap<String, String>, headers: &HeaderMap) {
        let header_value = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        *self.last_request.lock().unwrap() = RecordedRequest {
            path: uri.path().to_string(),
            query,
            authorization: header_value(header::AUTHORIZATION),
            content_type: header_value(header::CONTENT_TYPE),
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Mock server implementation
#[derive(Debug, Default)]
pub struct MockServer {
    state: MockServerState,
    port: u16,
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response, to exercise client timeouts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.state.delay = Some(delay);
        self
    }

    /// Start the mock server and return the base URL
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        Ok((self, server_url))
    }

    /// Get a reference to the server state
    pub fn state(&self) -> &MockServerState {
        &self.state
    }

    fn create_router(&self) -> Router {
        Router::new()
            .route("/api/v1/statuses/:id", get(status_handler))
            .route("/api/v1/accounts/search", get(accounts_search_handler))
            .route("/api/v1/timelines/tag/:hashtag", get(tag_timeline_handler))
            .with_state(self.state.clone())
    }
}

// Handler functions

async fn status_handler(
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    State(state): State<MockServerState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(&uri, query, &headers).await;

    match id.as_str() {
        "404" => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Record not found" })),
        )
            .into_response(),
        "garbage" => (StatusCode::OK, "this is not json").into_response(),
        "2" => Json(status_json(&id, "<p>short</p>")).into_response(),
        _ => {
            let content = format!("<p>{}</p>", "Rust is a systems language. ".repeat(5));
            Json(status_json(&id, &content)).into_response()
        }
    }
}

fn status_json(id: &str, content: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-01-01T00:00:00.000Z",
        "content": content,
        "favourites_count": 12,
        "reblogs_count": 3,
        "emojis": [],
        "media_attachments": [],
        "poll": null,
        "account": {
            "id": "100",
            "username": "alice",
            "acct": "alice",
            "display_name": "Alice"
        }
    })
}

async fn accounts_search_handler(
    Query(query): Query<HashMap<String, String>>,
    State(state): State<MockServerState>,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    let username = query.get("q").cloned().unwrap_or_default();
    state.record(&uri, query, &headers).await;

    if username == "nobody-here" {
        return Json(json!([]));
    }

    Json(json!([
        {
            "id": "1",
            "username": username,
            "acct": username,
            "display_name": "Eugen",
            "url": format!("https://mastodon.social/@{}", username),
            "followers_count": 300000,
            "following_count": 400
        },
        {
            "id": "2",
            "username": format!("{}_fan", username),
            "acct": format!("{}_fan@example.org", username),
            "display_name": "",
            "url": "https://example.org/@fan",
            "followers_count": 5,
            "following_count": 10
        }
    ]))
}

async fn tag_timeline_handler(
    Path(_hashtag): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    State(state): State<MockServerState>,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    state.record(&uri, query, &headers).await;

    Json(json!([
        {
            "id": "10",
            "content": "<p>#Rust 1.80 is out</p>",
            "account": { "id": "3", "username": "ferris" },
            "tags": [{ "name": "Rust", "url": "https://mastodon.social/tags/Rust" }],
            "media_attachments": [
                { "id": "m1", "type": "image", "url": "https://files.example/crab.png" }
            ]
        },
        {
            "id": "11",
            "content": "<p>learning #rust</p>",
            "account": { "id": "4", "username": "learner" },
            "tags": [{ "name": "rust", "url": "https://mastodon.social/tags/rust" }],
            "media_attachments": []
        }
    ]))
}
