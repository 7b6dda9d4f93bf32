//! Test stores — mock `StateStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chorebot_core::error::DomainError;
use chorebot_core::state::RotationState;
use chorebot_core::store::StateStore;

/// A state store that keeps the record in memory and counts saves.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: Mutex<Option<RotationState>>,
    saves: Mutex<Vec<RotationState>>,
}

impl InMemoryStateStore {
    /// Create an empty store, equivalent to a missing state file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `last_person_index`.
    #[must_use]
    pub fn with_index(last_person_index: i64) -> Self {
        Self {
            state: Mutex::new(Some(RotationState { last_person_index })),
            saves: Mutex::new(Vec::new()),
        }
    }

    /// Returns the currently stored state, if any was ever saved or seeded.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn current(&self) -> Option<RotationState> {
        *self.state.lock().unwrap()
    }

    /// Returns every state passed to `save`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_states(&self) -> Vec<RotationState> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load(&self) -> RotationState {
        self.state.lock().unwrap().unwrap_or_default()
    }

    async fn save(&self, state: RotationState) -> Result<(), DomainError> {
        *self.state.lock().unwrap() = Some(state);
        self.saves.lock().unwrap().push(state);
        Ok(())
    }
}

/// A state store that reads as fresh and refuses every save. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingStateStore;

#[async_trait]
impl StateStore for FailingStateStore {
    async fn load(&self) -> RotationState {
        RotationState::default()
    }

    async fn save(&self, _state: RotationState) -> Result<(), DomainError> {
        Err(DomainError::Persistence("disk full".into()))
    }
}
