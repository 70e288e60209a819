//! Draft store keeping one file per key
//!
//! Keys are mapped to file names by replacing anything outside
//! `[A-Za-z0-9_-]` with `_`, so `feedback-draft:<uuid>` becomes
//! `feedback-draft_<uuid>.draft`. Writes go to a temporary sibling first and
//! are renamed into place, so a reader never sees a half-written draft.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use talentdesk_core::DraftStore;
use talentdesk_domain::{Result, TalentDeskError};
use tracing::debug;

use crate::errors::InfraError;

const EXTENSION: &str = "draft";

/// Draft store keeping one file per key in a directory
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    /// Store drafts under `dir`, creating it if needed.
    ///
    /// # Errors
    /// Returns `TalentDeskError::Storage` if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await.map_err(InfraError::from)?;
        debug!(dir = %dir.display(), "draft directory ready");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(TalentDeskError::InvalidInput("draft key is empty".to_string()));
        }
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        Ok(self.dir.join(format!("{name}.{EXTENSION}")))
    }
}

#[async_trait]
impl DraftStore for FileDraftStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)?).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    async fn save(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        let staging = path.with_extension(format!("{EXTENSION}.tmp"));
        tokio::fs::write(&staging, value).await.map_err(InfraError::from)?;
        tokio::fs::rename(&staging, &path).await.map_err(InfraError::from)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        match tokio::fs::remove_file(self.path_for(key)?).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}
