use anyhow::{Result, anyhow};
use game_types::WORD_LENGTH;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::Path;

/// Target words used when no word file is configured.
pub const DEFAULT_WORDS: &[&str] = &[
    "AUDIO", "HOMER", "JOKER", "TONER", "TOWER", "CRANE", "SLATE", "ADIEU", "RAISE", "ROAST",
    "LEAST", "BEAST", "FEAST", "COAST", "TOAST", "BOAST", "GHOST", "FROST", "TRUST", "BLAST",
];

#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a newline separated word list.
    /// Blank lines and `#` comments are skipped, as is anything that is not
    /// a five letter alphabetic word. Duplicates are dropped.
    pub fn from_word_list(word_list: &str) -> Self {
        let mut words: Vec<String> = Vec::new();

        for word in word_list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_uppercase)
            .filter(|word| Self::is_playable(word))
        {
            if !words.contains(&word) {
                words.push(word);
            }
        }

        Self { words }
    }

    /// Load a word list from a file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read word list {}: {}", path.display(), e))?;

        let list = Self::from_word_list(&contents);
        if list.is_empty() {
            return Err(anyhow!("No playable words in {}", path.display()));
        }

        tracing::info!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        self.words.contains(&word)
    }

    /// Pick a target word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    fn is_playable(word: &str) -> bool {
        word.chars().count() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
