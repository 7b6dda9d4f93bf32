//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chorebot_core::participants::ParticipantList;
use chorebot_core::rotation::Rotation;
use chorebot_state_store::file_state_store::FileStateStore;
use chorebot_test_support::RecordingNotifier;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use chorebot_api::build_router;
use chorebot_api::state::AppState;

/// Chat identifier the test app is configured to answer in.
pub const TARGET_CHAT: &str = "120363000000000000@g.us";

/// A fully wired app over a real state file in a temporary directory.
pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<RecordingNotifier>,
    pub state_file: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    /// Reads the persisted `last_person_index`, or `None` if the state file
    /// was never written.
    pub fn persisted_index(&self) -> Option<i64> {
        let bytes = std::fs::read(&self.state_file).ok()?;
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["last_person_index"].as_i64()
    }
}

/// Build the full app router with a file-backed store and a recording
/// notifier. Uses the same router as `main.rs`.
pub fn build_test_app(participants: &str) -> TestApp {
    let dir = TempDir::new().unwrap();
    let state_file = dir.path().join("data.json");
    let store = Arc::new(FileStateStore::new(&state_file));
    let rotation = Rotation::new(ParticipantList::parse_csv(participants).unwrap(), store);
    let notifier = Arc::new(RecordingNotifier::new());
    let app_state = AppState::new(TARGET_CHAT, Arc::new(rotation), notifier.clone());

    TestApp {
        router: build_router(app_state),
        notifier,
        state_file,
        _dir: dir,
    }
}

/// A webhook body with one text message.
pub fn text_event(chat_id: &str, body: &str) -> serde_json::Value {
    serde_json::json!({ "messages": [
        { "from_me": false, "chat_id": chat_id, "text": { "body": body } }
    ]})
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
