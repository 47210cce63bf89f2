use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Score, StoreError};

/// Durable home of the score list. The whole list is written on every save.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Returns `None` when nothing has been stored yet
    async fn load(&self) -> Result<Option<Vec<Score>>, StoreError>;
    async fn save(&self, scores: &[Score]) -> Result<(), StoreError>;
}

/// Stores scores as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileScoreRepository {
    path: PathBuf,
}

impl JsonFileScoreRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

#[async_trait]
impl ScoreRepository for JsonFileScoreRepository {
    async fn load(&self) -> Result<Option<Vec<Score>>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let scores: Vec<Score> = serde_json::from_slice(&raw)?;
        debug!(path = %self.path.display(), count = scores.len(), "Loaded scores");
        Ok(Some(scores))
    }

    async fn save(&self, scores: &[Score]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(scores)?;

        // Write then rename so a crash never leaves a half-written list behind
        let staging = self.staging_path();
        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        debug!(path = %self.path.display(), count = scores.len(), "Saved scores");
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryScoreRepository {
    scores: Arc<RwLock<Option<Vec<Score>>>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: Vec<Score>) -> Self {
        Self {
            scores: Arc::new(RwLock::new(Some(scores))),
        }
    }

    /// What the last save wrote, if anything
    pub async fn stored(&self) -> Option<Vec<Score>> {
        self.scores.read().await.clone()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn load(&self) -> Result<Option<Vec<Score>>, StoreError> {
        Ok(self.scores.read().await.clone())
    }

    async fn save(&self, scores: &[Score]) -> Result<(), StoreError> {
        *self.scores.write().await = Some(scores.to_vec());
        Ok(())
    }
}
