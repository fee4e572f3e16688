use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Storage error: {0}")]
    Store(#[from] DbErr),
    #[error("Stored value under '{key}' is not valid JSON: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    /// Malformed data that callers recover from by resetting to defaults.
    pub fn is_parse(&self) -> bool {
        matches!(self, PersistenceError::Parse { .. })
    }
}
