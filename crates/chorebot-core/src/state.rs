//! Persisted rotation state.

use serde::{Deserialize, Serialize};

/// Index value meaning "nobody has completed the chore yet".
pub const UNINITIALIZED_INDEX: i64 = -1;

/// The single persisted record of the rotation.
///
/// `last_person_index` is the participant who most recently completed the
/// chore; the participant whose turn it is now always follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    /// Index of the last completer, or `-1` when uninitialized.
    #[serde(default = "uninitialized_index")]
    pub last_person_index: i64,
}

fn uninitialized_index() -> i64 {
    UNINITIALIZED_INDEX
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            last_person_index: UNINITIALIZED_INDEX,
        }
    }
}

impl RotationState {
    /// Index of the participant whose turn it is, for a list of `len` names.
    ///
    /// Uses Euclidean remainder so a stale index from a longer list still
    /// lands inside `[0, len)`. The stored index is reduced before the
    /// increment, so no persisted value can overflow.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    #[must_use]
    pub fn current_index(self, len: usize) -> usize {
        assert!(len > 0, "participant list cannot be empty");
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let next = (self.last_person_index.rem_euclid(len) + 1).rem_euclid(len);
        // `rem_euclid` with a positive modulus is always in `[0, len)`.
        usize::try_from(next).unwrap_or_default()
    }

    /// The state after the current participant completes the chore.
    #[must_use]
    pub fn advanced(self, len: usize) -> Self {
        let next = self.current_index(len);
        Self {
            last_person_index: i64::try_from(next).unwrap_or(UNINITIALIZED_INDEX),
        }
    }
}
