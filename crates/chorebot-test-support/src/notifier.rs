//! Test notifiers — mock `Notifier` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chorebot_core::error::DomainError;
use chorebot_core::notifier::Notifier;

/// A message captured by `RecordingNotifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Destination chat.
    pub chat_id: String,
    /// Message text.
    pub body: String,
}

/// A notifier that records every message and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingNotifier {
    /// Create a notifier with no recorded messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all messages sent so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_text(&self, chat_id: &str, body: &str) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat_id.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}

/// A notifier whose messaging API always answers 401.
#[derive(Debug)]
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send_text(&self, _chat_id: &str, _body: &str) -> Result<(), DomainError> {
        Err(DomainError::DeliveryRejected {
            status: 401,
            body: r#"{"error":"unauthorized"}"#.into(),
        })
    }
}
