//! Outbound chat message abstraction.

use async_trait::async_trait;

use crate::error::DomainError;

/// Sends a text reply to a chat on the messaging platform.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `body` to `chat_id`.
    async fn send_text(&self, chat_id: &str, body: &str) -> Result<(), DomainError>;
}
