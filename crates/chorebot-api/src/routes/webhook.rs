//! Inbound webhook from the messaging platform.
//!
//! Every delivery is answered with 200 unless the body is malformed or
//! command handling itself fails, so the platform does not redeliver
//! ignored messages.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{Span, debug, error, info, instrument};
use uuid::Uuid;

use chorebot_commands::application::command_handlers;
use chorebot_core::error::DomainError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /webhook.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookPayload {
    /// New message events, in delivery order.
    #[serde(default)]
    pub messages: Vec<MessageEvent>,
}

/// A single message event. Fields the bot does not use are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct MessageEvent {
    /// `true` when the bot's own account sent the message.
    #[serde(default)]
    pub from_me: Option<bool>,
    /// Chat the message was posted in.
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Text content; absent for media messages.
    #[serde(default)]
    pub text: Option<TextContent>,
}

/// Text content of a message event.
#[derive(Debug, Default, Deserialize)]
pub struct TextContent {
    /// Raw message text.
    #[serde(default)]
    pub body: String,
}

impl MessageEvent {
    fn is_own(&self) -> bool {
        self.from_me.unwrap_or(false)
    }

    fn body(&self) -> &str {
        self.text.as_ref().map_or("", |t| t.body.as_str())
    }
}

/// Response body for POST /webhook.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// `ok` or `ignored`.
    pub status: &'static str,
    /// Why the delivery was ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl WebhookResponse {
    fn ok() -> Self {
        Self {
            status: "ok",
            reason: None,
        }
    }

    fn ignored() -> Self {
        Self {
            status: "ignored",
            reason: Some("Not target group"),
        }
    }
}

/// POST /webhook
///
/// A body that is not a JSON webhook payload is reported as a 500 with a
/// JSON error body, like any other processing failure.
#[instrument(
    skip(state, payload),
    fields(delivery_id = %Uuid::new_v4(), events = tracing::field::Empty)
)]
async fn receive_webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookPayload>, JsonRejection>,
) -> Result<Json<WebhookResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        error!(error = %rejection.body_text(), "malformed webhook payload");
        ApiError::from(DomainError::Validation(format!(
            "malformed webhook payload: {}",
            rejection.body_text()
        )))
    })?;
    Span::current().record("events", payload.messages.len());

    let mut handled = 0_usize;
    let mut foreign = 0_usize;

    for event in &payload.messages {
        if event.is_own() {
            debug!("skipping message sent by the bot");
            continue;
        }

        let chat_id = event.chat_id.as_deref().unwrap_or_default();
        if chat_id != &*state.target_chat_id {
            info!(chat_id, target = %state.target_chat_id, "message ignored, not from target chat");
            foreign += 1;
            continue;
        }
        handled += 1;

        let reply = command_handlers::handle_text(event.body(), &state.rotation)
            .await
            .map_err(|e| {
                error!(error = %e, "webhook processing failed");
                ApiError::from(e)
            })?;

        let Some(reply) = reply else {
            continue;
        };

        // Delivery failures are logged only; the response does not depend on them.
        if let Err(e) = state.notifier.send_text(chat_id, &reply).await {
            error!(error = %e, chat_id, "failed to deliver reply");
        }
    }

    if handled == 0 && foreign > 0 {
        Ok(Json(WebhookResponse::ignored()))
    } else {
        Ok(Json(WebhookResponse::ok()))
    }
}

/// Returns the router for the webhook endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", post(receive_webhook))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chorebot_core::notifier::Notifier;
    use chorebot_core::participants::ParticipantList;
    use chorebot_core::rotation::Rotation;
    use chorebot_core::store::StateStore;
    use chorebot_test_support::{
        FailingNotifier, FailingStateStore, InMemoryStateStore, RecordingNotifier,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const TARGET: &str = "120363@g.us";

    fn app_state_with(store: Arc<dyn StateStore>, notifier: Arc<dyn Notifier>) -> AppState {
        let rotation = Rotation::new(ParticipantList::parse_csv("Ana,Bruno").unwrap(), store);
        AppState::new(TARGET, Arc::new(rotation), notifier)
    }

    async fn post_webhook(state: AppState, body: &Value) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let request = Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let payload: WebhookPayload =
            serde_json::from_value(json!({ "messages": [{}, { "chat_id": "x" }] })).unwrap();

        assert_eq!(payload.messages.len(), 2);
        assert!(!payload.messages[0].is_own());
        assert_eq!(payload.messages[1].body(), "");
    }

    #[tokio::test]
    async fn test_whose_turn_replies_to_target_chat() {
        // Arrange
        let notifier = Arc::new(RecordingNotifier::new());
        let state = app_state_with(Arc::new(InMemoryStateStore::new()), notifier.clone());
        let body = json!({ "messages": [
            { "from_me": false, "chat_id": TARGET, "text": { "body": "#quem" } }
        ]});

        // Act
        let (status, json) = post_webhook(state, &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "status": "ok" }));
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].chat_id, TARGET);
        assert!(sent[0].body.contains("*Ana*"));
    }

    #[tokio::test]
    async fn test_failing_notifier_does_not_change_response() {
        let store = Arc::new(InMemoryStateStore::new());
        let state = app_state_with(store.clone(), Arc::new(FailingNotifier));
        let body = json!({ "messages": [
            { "chat_id": TARGET, "text": { "body": "#levei" } }
        ]});

        let (status, json) = post_webhook(state, &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(store.current().unwrap().last_person_index, 0);
    }

    #[tokio::test]
    async fn test_persistence_failure_returns_500_with_message() {
        let notifier = Arc::new(RecordingNotifier::new());
        let state = app_state_with(Arc::new(FailingStateStore), notifier.clone());
        let body = json!({ "messages": [
            { "chat_id": TARGET, "text": { "body": "#check" } }
        ]});

        let (status, json) = post_webhook(state, &body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "persistence_error");
        assert!(json["message"].as_str().unwrap().contains("disk full"));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_bodies_return_500_with_json_error() {
        let bodies = [
            "not json",
            "null",
            r#"{"messages":"x"}"#,
            r#"{"messages":[{"from_me":"yes"}]}"#,
        ];

        for raw in bodies {
            // Arrange
            let store = Arc::new(InMemoryStateStore::new());
            let notifier = Arc::new(RecordingNotifier::new());
            let app = router().with_state(app_state_with(store.clone(), notifier.clone()));
            let request = Request::builder()
                .method("POST")
                .uri("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(raw))
                .unwrap();

            // Act
            let response = app.oneshot(request).await.unwrap();

            // Assert
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "body={raw}"
            );
            let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let json: Value = serde_json::from_slice(&body_bytes).unwrap();
            assert_eq!(json["status"], "error");
            assert_eq!(json["error"], "validation_error");
            assert!(
                json["message"]
                    .as_str()
                    .unwrap()
                    .starts_with("validation error: malformed webhook payload"),
                "body={raw}"
            );
            assert!(store.saved_states().is_empty());
            assert!(notifier.sent().is_empty());
        }
    }
}
