use anyhow::{Context, Result, ensure};
use game_core::EvaluationMode;
use game_types::DAILY_GAME_LIMIT;
use std::env;

/// `DATABASE_URL` value that keeps everything in process memory.
pub const MEMORY_STORE: &str = "memory";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub words_file: Option<String>,
    pub daily_game_limit: u32,
    pub evaluation_mode: EvaluationMode,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let daily_game_limit: u32 = lookup("DAILY_GAME_LIMIT")
            .unwrap_or_else(|| DAILY_GAME_LIMIT.to_string())
            .parse()
            .context("Invalid DAILY_GAME_LIMIT")?;
        // The allowance may be lowered but never raised above the default
        ensure!(
            (1..=DAILY_GAME_LIMIT).contains(&daily_game_limit),
            "Invalid DAILY_GAME_LIMIT: must be between 1 and {}",
            DAILY_GAME_LIMIT
        );

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://word_craft.db?mode=rwc".to_string()),
            words_file: lookup("WORDS_FILE").filter(|path| !path.trim().is_empty()),
            daily_game_limit,
            evaluation_mode: lookup("EVALUATION_MODE")
                .unwrap_or_else(|| "simple".to_string())
                .parse()
                .context("Invalid EVALUATION_MODE")?,
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_STORE
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "sqlite://word_craft.db?mode=rwc".to_string(),
            words_file: None,
            daily_game_limit: DAILY_GAME_LIMIT,
            evaluation_mode: EvaluationMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.daily_game_limit, 3);
        assert_eq!(config.evaluation_mode, EvaluationMode::Simple);
        assert_eq!(config.words_file, None);
        assert!(!config.uses_memory_store());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("DATABASE_URL", "memory"),
            ("DAILY_GAME_LIMIT", "2"),
            ("EVALUATION_MODE", "duplicate-aware"),
            ("WORDS_FILE", "/tmp/words.txt"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.uses_memory_store());
        assert_eq!(config.daily_game_limit, 2);
        assert_eq!(config.evaluation_mode, EvaluationMode::DuplicateAware);
        assert_eq!(config.words_file.as_deref(), Some("/tmp/words.txt"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));

        let err = Config::from_lookup(lookup_from(&[("EVALUATION_MODE", "fuzzy")])).unwrap_err();
        assert!(err.to_string().contains("Invalid EVALUATION_MODE"));
    }

    #[test]
    fn test_daily_limit_cannot_exceed_three() {
        for value in ["4", "10", "0"] {
            let err = Config::from_lookup(lookup_from(&[("DAILY_GAME_LIMIT", value)])).unwrap_err();
            assert!(err.to_string().contains("Invalid DAILY_GAME_LIMIT"), "{}", value);
        }

        let config = Config::from_lookup(lookup_from(&[("DAILY_GAME_LIMIT", "3")])).unwrap();
        assert_eq!(config.daily_game_limit, 3);
    }
}
