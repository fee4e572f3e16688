use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type SessionId = Uuid;

/// Every target word and every accepted guess has exactly this many letters.
pub const WORD_LENGTH: usize = 5;

/// A round is lost once this many guesses miss the target.
pub const MAX_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameStatus {
    Playing, // Accepting guesses
    Won,     // Target word guessed
    Lost,    // Ran out of attempts
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LetterStatus {
    Correct, // Right letter in the right position
    Present, // Letter occurs elsewhere in the word
    Absent,  // Letter not in word
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
    pub position: usize,
}

/// One evaluated row of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessResult {
    pub word: String,
    pub letters: Vec<LetterResult>,
}

impl GuessResult {
    pub fn is_solved(&self) -> bool {
        !self.letters.is_empty()
            && self
                .letters
                .iter()
                .all(|l| l.status == LetterStatus::Correct)
    }

    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status == status).count()
    }
}

/// Client-facing view of a session.
/// The target word stays hidden until the round is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameSessionView {
    pub id: SessionId,
    pub status: GameStatus,
    pub board: Vec<GuessResult>,
    pub attempts: usize,
    pub remaining_attempts: usize,
    pub word_length: usize,
    pub target_word: Option<String>,
    pub started_at: DateTime<Utc>,
}

/// Historical record of a finished round, appended to the shared result log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameResult {
    pub username: String,
    pub word: String,
    pub guesses: Vec<String>,
    pub won: bool,
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
    pub attempts: usize,
}
