//! `reqwest` implementation of the `Notifier` trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument, warn};

use chorebot_core::error::DomainError;
use chorebot_core::notifier::Notifier;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body of `POST /messages/text`.
#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    to: &'a str,
    body: &'a str,
}

/// Thin HTTP client for the messaging API's text endpoint.
#[derive(Clone)]
pub struct WhapiNotifier {
    client: Client,
    endpoint: String,
    token: String,
}

impl std::fmt::Debug for WhapiNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhapiNotifier")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl WhapiNotifier {
    /// Create a client for the given API base URL (e.g. `https://gate.whapi.cloud`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Delivery` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Delivery(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/messages/text", base_url.trim_end_matches('/')),
            token: token.into(),
        })
    }

    /// Full URL messages are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Notifier for WhapiNotifier {
    #[instrument(skip(self, body), fields(endpoint = %self.endpoint))]
    async fn send_text(&self, chat_id: &str, body: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&TextMessage { to: chat_id, body })
            .send()
            .await
            .map_err(|e| DomainError::Delivery(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status.is_success() {
            info!(status = status.as_u16(), response = %text, "message delivered");
            Ok(())
        } else {
            warn!(status = status.as_u16(), response = %text, "messaging API rejected message");
            Err(DomainError::DeliveryRejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}
