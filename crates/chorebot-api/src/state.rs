//! Shared application state.

use std::sync::Arc;

use chorebot_core::notifier::Notifier;
use chorebot_core::rotation::Rotation;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The only chat whose messages are acted on.
    pub target_chat_id: Arc<str>,
    /// The chore rotation.
    pub rotation: Arc<Rotation>,
    /// Outbound reply channel.
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        target_chat_id: impl Into<Arc<str>>,
        rotation: Arc<Rotation>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            target_chat_id: target_chat_id.into(),
            rotation,
            notifier,
        }
    }
}
