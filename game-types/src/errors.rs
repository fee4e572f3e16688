use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rejections raised while playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("Please enter a 5-letter word (got {length} letters)")]
    InvalidGuessLength { length: usize },
    #[error("This round is already over")]
    GameAlreadyCompleted,
    #[error("No game in progress")]
    NoActiveGame,
    #[error("You have reached your daily limit of {limit} games!")]
    DailyLimitReached { limit: u32 },
    #[error("No words available")]
    NoWordsAvailable,
}

/// Reasons a username or password fails the shape rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum ValidationError {
    #[error("Username must be at least {min} characters long")]
    UsernameTooShort { min: usize },
    #[error("Username must include both upper and lower case letters")]
    UsernameMissingCase,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
    #[error("Password must include alphabetic characters")]
    PasswordMissingLetter,
    #[error("Password must include at least one number")]
    PasswordMissingDigit,
    #[error("Password must include one of: $ % * @")]
    PasswordMissingSpecial,
}
