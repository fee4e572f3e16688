use std::sync::Arc;

use game_types::GameResult;

use crate::{KeyValueStore, PersistenceError};

/// Storage key of the shared, append-only result log.
pub const RESULTS_KEY: &str = "gameResults";

pub struct ResultRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ResultRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The full log in insertion order. A missing key reads as an empty log.
    pub async fn all(&self) -> Result<Vec<GameResult>, PersistenceError> {
        let Some(raw) = self.store.get(RESULTS_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| PersistenceError::Parse {
            key: RESULTS_KEY.to_string(),
            source,
        })
    }

    /// Read-modify-write append. Returns the new length of the log.
    pub async fn append(&self, result: GameResult) -> Result<usize, PersistenceError> {
        let mut results = self.all().await?;
        results.push(result);
        self.write(&results).await?;
        Ok(results.len())
    }

    /// Drop the whole log.
    pub async fn clear(&self) -> Result<(), PersistenceError> {
        self.store.remove(RESULTS_KEY).await
    }

    async fn write(&self, results: &[GameResult]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(results).map_err(|source| PersistenceError::Serialize {
            key: RESULTS_KEY.to_string(),
            source,
        })?;

        self.store.set(RESULTS_KEY, &raw).await
    }
}
