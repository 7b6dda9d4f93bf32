//! The rotation service: reads and advances whose turn it is.
//!
//! Every operation re-reads the state from the store, so the durable record
//! stays authoritative. A single async mutex is held across each
//! read-modify-write so concurrent webhook deliveries cannot lose an advance.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::error::DomainError;
use crate::participants::ParticipantList;
use crate::store::StateStore;

/// Result of an advance: who just did the chore and who is up next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    /// Participant credited with completing the chore.
    pub completed_by: String,
    /// Participant whose turn it is after the advance.
    pub now_current: String,
}

/// Circular chore rotation backed by a `StateStore`.
pub struct Rotation {
    participants: ParticipantList,
    store: Arc<dyn StateStore>,
    lock: Mutex<()>,
}

impl std::fmt::Debug for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rotation")
            .field("participants", &self.participants)
            .finish_non_exhaustive()
    }
}

impl Rotation {
    /// Creates a rotation over `participants` persisted in `store`.
    #[must_use]
    pub fn new(participants: ParticipantList, store: Arc<dyn StateStore>) -> Self {
        Self {
            participants,
            store,
            lock: Mutex::new(()),
        }
    }

    /// The configured participants, in rotation order.
    #[must_use]
    pub fn participants(&self) -> &ParticipantList {
        &self.participants
    }

    /// Returns the participant whose turn it is, without mutating state.
    #[instrument(skip(self))]
    pub async fn peek_current(&self) -> String {
        let _guard = self.lock.lock().await;
        self.current_unlocked().await
    }

    /// Credits the current participant with the chore and persists the
    /// advance. Returns the participant who just completed it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the new state cannot be saved.
    #[instrument(skip(self))]
    pub async fn advance_and_return_completer(&self) -> Result<String, DomainError> {
        let _guard = self.lock.lock().await;
        self.advance_unlocked().await
    }

    /// Advances the rotation and reports both the completer and the new
    /// current participant, as one atomic step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the new state cannot be saved.
    #[instrument(skip(self))]
    pub async fn advance(&self) -> Result<Handoff, DomainError> {
        let _guard = self.lock.lock().await;
        let completed_by = self.advance_unlocked().await?;
        let now_current = self.current_unlocked().await;

        info!(%completed_by, %now_current, "rotation advanced");

        Ok(Handoff {
            completed_by,
            now_current,
        })
    }

    async fn current_unlocked(&self) -> String {
        let state = self.store.load().await;
        let index = state.current_index(self.participants.len());
        debug!(last_person_index = state.last_person_index, index, "peeked rotation");
        self.name_at(index)
    }

    async fn advance_unlocked(&self) -> Result<String, DomainError> {
        let state = self.store.load().await;
        let next = state.advanced(self.participants.len());
        self.store.save(next).await?;

        let index = usize::try_from(next.last_person_index).unwrap_or_default();
        Ok(self.name_at(index))
    }

    fn name_at(&self, index: usize) -> String {
        // `index` comes from `RotationState::current_index`, always in range.
        self.participants.get(index).unwrap_or_default().to_owned()
    }
}
