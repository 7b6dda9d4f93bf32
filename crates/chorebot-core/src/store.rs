//! Durable rotation state abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::state::RotationState;

/// Storage for the single `RotationState` record.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Loads the persisted state.
    ///
    /// Missing or unreadable state yields `RotationState::default()`.
    async fn load(&self) -> RotationState;

    /// Persists `state`, returning only after it is durable.
    async fn save(&self, state: RotationState) -> Result<(), DomainError>;
}
