use std::sync::Arc;

use game_types::Identity;

use crate::{KeyValueStore, PersistenceError};

/// Storage key of the single logged-in identity slot.
pub const IDENTITY_KEY: &str = "wordGameUser";

pub struct IdentityRepository {
    store: Arc<dyn KeyValueStore>,
}

impl IdentityRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Option<Identity>, PersistenceError> {
        let Some(raw) = self.store.get(IDENTITY_KEY).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistenceError::Parse {
                key: IDENTITY_KEY.to_string(),
                source,
            })
    }

    /// Overwrite the slot with `identity`.
    pub async fn save(&self, identity: &Identity) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(identity).map_err(|source| PersistenceError::Serialize {
            key: IDENTITY_KEY.to_string(),
            source,
        })?;

        self.store.set(IDENTITY_KEY, &raw).await
    }

    pub async fn clear(&self) -> Result<(), PersistenceError> {
        self.store.remove(IDENTITY_KEY).await
    }
}
