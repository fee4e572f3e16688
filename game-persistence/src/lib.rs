pub mod connection;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod store;

pub use error::PersistenceError;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
