use game_persistence::PersistenceError;
use game_types::{ErrorResponse, GameError};
use warp::http::StatusCode;

use crate::auth::AuthError;

/// Every failure a request can end in.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("Clearing all results requires confirm=true")]
    ConfirmationRequired,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Game(GameError::InvalidGuessLength { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Game(GameError::NoActiveGame | GameError::GameAlreadyCompleted) => {
                StatusCode::CONFLICT
            }
            ApiError::Game(GameError::DailyLimitReached { .. }) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Game(GameError::NoWordsAvailable) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auth(AuthError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::NotLoggedIn) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(AuthError::AdminRequired) => StatusCode::FORBIDDEN,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ConfirmationRequired => StatusCode::BAD_REQUEST,
        }
    }

    /// Short machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Game(GameError::InvalidGuessLength { .. }) => "invalid_guess_length",
            ApiError::Game(GameError::GameAlreadyCompleted) => "game_already_completed",
            ApiError::Game(GameError::NoActiveGame) => "no_active_game",
            ApiError::Game(GameError::DailyLimitReached { .. }) => "daily_limit_reached",
            ApiError::Game(GameError::NoWordsAvailable) => "no_words_available",
            ApiError::Auth(AuthError::Validation(_)) => "invalid_credentials",
            ApiError::Auth(AuthError::NotLoggedIn) => "not_logged_in",
            ApiError::Auth(AuthError::AdminRequired) => "admin_required",
            ApiError::Persistence(_) => "storage_error",
            ApiError::ConfirmationRequired => "confirmation_required",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            // Storage details stay in the logs
            ApiError::Persistence(_) => "Failed to access stored data".to_string(),
            other => other.to_string(),
        };

        ErrorResponse {
            error: self.code().to_string(),
            message,
        }
    }

    pub fn into_reply(self) -> warp::reply::WithStatus<warp::reply::Json> {
        if let ApiError::Persistence(err) = &self {
            tracing::error!("Storage failure: {}", err);
        }

        warp::reply::with_status(warp::reply::json(&self.to_response()), self.status())
    }
}
