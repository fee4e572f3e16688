use chrono::{DateTime, Utc};
use game_types::{
    GameError, GameResult, GameSessionView, GameStatus, GuessResult, MAX_ATTEMPTS, SessionId,
    WORD_LENGTH,
};
use uuid::Uuid;

use crate::{EvaluationMode, LetterEvaluator};

/// What happened to the round after an accepted guess.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    Continuing(GuessResult),
    Won(GuessResult),
    Lost(GuessResult),
}

impl GuessOutcome {
    pub fn guess(&self) -> &GuessResult {
        match self {
            GuessOutcome::Continuing(guess)
            | GuessOutcome::Won(guess)
            | GuessOutcome::Lost(guess) => guess,
        }
    }

    pub fn is_round_over(&self) -> bool {
        !matches!(self, GuessOutcome::Continuing(_))
    }
}

/// One round of play against a hidden target word.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    target_word: String, // Hidden from clients until the round ends
    guesses: Vec<String>,
    board: Vec<GuessResult>,
    status: GameStatus,
    mode: EvaluationMode,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(target_word: impl Into<String>) -> Self {
        Self::with_mode(target_word, EvaluationMode::default())
    }

    pub fn with_mode(target_word: impl Into<String>, mode: EvaluationMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            target_word: target_word.into().to_uppercase(),
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            board: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::Playing,
            mode,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn board(&self) -> &[GuessResult] {
        &self.board
    }

    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts())
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Submit a guess. Guesses that are not exactly five letters, or that
    /// arrive after the round has ended, leave the session untouched.
    pub fn submit_guess(&mut self, word: &str) -> Result<GuessOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyCompleted);
        }

        // Uppercasing may change the length (ß becomes SS)
        let guess = word.to_uppercase();
        let length = guess.chars().count();
        if length != WORD_LENGTH {
            return Err(GameError::InvalidGuessLength { length });
        }

        let result = LetterEvaluator::evaluate_guess(&guess, &self.target_word, self.mode);

        self.guesses.push(guess.clone());
        self.board.push(result.clone());

        if guess == self.target_word {
            self.status = GameStatus::Won;
            Ok(GuessOutcome::Won(result))
        } else if self.attempts() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            Ok(GuessOutcome::Lost(result))
        } else {
            Ok(GuessOutcome::Continuing(result))
        }
    }

    /// Build the historical record for a finished round.
    pub fn to_result(&self, username: &str, timestamp: DateTime<Utc>) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        Some(GameResult {
            username: username.to_string(),
            word: self.target_word.clone(),
            guesses: self.guesses.clone(),
            won: self.status == GameStatus::Won,
            timestamp,
            attempts: self.attempts(),
        })
    }

    /// Safe version of the session that only reveals the word once the round is over.
    pub fn view(&self) -> GameSessionView {
        GameSessionView {
            id: self.id,
            status: self.status,
            board: self.board.clone(),
            attempts: self.attempts(),
            remaining_attempts: self.remaining_attempts(),
            word_length: WORD_LENGTH,
            target_word: self.is_over().then(|| self.target_word.clone()),
            started_at: self.started_at,
        }
    }
}
