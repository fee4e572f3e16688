use async_trait::async_trait;

use crate::PersistenceError;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Flat string key-value storage with whole-value overwrite semantics.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}
