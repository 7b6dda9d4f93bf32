//! File implementation of the `StateStore` trait.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

use chorebot_core::error::DomainError;
use chorebot_core::state::RotationState;
use chorebot_core::store::StateStore;

use crate::document;

/// Default location of the state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "data.json";

/// JSON-file-backed state store.
///
/// Writes go to a sibling `.tmp` file that is flushed and synced before it
/// is renamed over the target, so readers never see a partial document.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Creates a store persisting to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn write_atomic(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        let result = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(bytes).await?;
            file.flush().await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if result.is_err() {
            // Leave no stray temp file behind; the original error is what matters.
            let _ = fs::remove_file(&temp_path).await;
        }
        result
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> RotationState {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("state file missing, starting fresh");
                return RotationState::default();
            }
            Err(e) => {
                warn!(error = %e, "state file unreadable, starting fresh");
                return RotationState::default();
            }
        };

        match document::decode(&bytes) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "state file unparsable, starting fresh");
                RotationState::default()
            }
        }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn save(&self, state: RotationState) -> Result<(), DomainError> {
        let bytes = document::encode(&state)
            .map_err(|e| DomainError::Persistence(format!("state serialization failed: {e}")))?;

        self.write_atomic(&bytes).await.map_err(|e| {
            DomainError::Persistence(format!(
                "failed to write state file {}: {e}",
                self.path.display()
            ))
        })?;

        debug!(last_person_index = state.last_person_index, "state saved");
        Ok(())
    }
}
