//! The fixed, ordered list of people sharing the chore.

use std::fmt;

use crate::error::DomainError;

/// Ordered, non-empty list of participant names.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantList {
    names: Vec<String>,
}

impl ParticipantList {
    /// Creates a participant list from already-split names.
    ///
    /// Names are trimmed and blank entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no names remain.
    pub fn new<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Err(DomainError::Validation(
                "participant list must contain at least one name".to_owned(),
            ));
        }

        Ok(Self { names })
    }

    /// Parses a comma-separated list such as `"Ana, Bruno,Carla"`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the list has no names.
    pub fn parse_csv(raw: &str) -> Result<Self, DomainError> {
        Self::new(raw.split(','))
    }

    /// Number of participants. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the participant at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterates over the names in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for ParticipantList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(", "))
    }
}
