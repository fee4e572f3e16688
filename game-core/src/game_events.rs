use game_types::{GameResult, GuessResult, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    LoggedIn {
        username: String,
        is_admin: bool,
    },
    LoggedOut {
        username: String,
    },
    RoundStarted {
        session_id: SessionId,
        username: String,
        games_played_today: u32,
    },
    GuessAccepted {
        session_id: SessionId,
        username: String,
        guess: GuessResult,
        attempts: usize,
    },
    RoundEnded {
        session_id: SessionId,
        result: GameResult,
    },
    ResultsCleared {
        username: String,
        removed: usize,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            GameEvent::RoundStarted { session_id, .. } => Some(*session_id),
            GameEvent::GuessAccepted { session_id, .. } => Some(*session_id),
            GameEvent::RoundEnded { session_id, .. } => Some(*session_id),
            GameEvent::LoggedIn { .. }
            | GameEvent::LoggedOut { .. }
            | GameEvent::ResultsCleared { .. } => None,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            GameEvent::LoggedIn { username, .. } => username,
            GameEvent::LoggedOut { username } => username,
            GameEvent::RoundStarted { username, .. } => username,
            GameEvent::GuessAccepted { username, .. } => username,
            GameEvent::RoundEnded { result, .. } => &result.username,
            GameEvent::ResultsCleared { username, .. } => username,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler: Send {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes every event to the tracing subscriber.
pub struct LoggingEventHandler;

impl GameEventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::LoggedIn { username, is_admin } => {
                tracing::info!(%username, is_admin, "Player logged in");
            }
            GameEvent::LoggedOut { username } => {
                tracing::info!(%username, "Player logged out");
            }
            GameEvent::RoundStarted {
                session_id,
                username,
                games_played_today,
            } => {
                tracing::info!(%session_id, %username, games_played_today, "Round started");
            }
            GameEvent::GuessAccepted {
                session_id,
                username,
                guess,
                attempts,
            } => {
                tracing::debug!(%session_id, %username, word = %guess.word, attempts, "Guess accepted");
            }
            GameEvent::RoundEnded { session_id, result } => {
                tracing::info!(
                    %session_id,
                    username = %result.username,
                    won = result.won,
                    attempts = result.attempts,
                    "Round ended"
                );
            }
            GameEvent::ResultsCleared { username, removed } => {
                tracing::warn!(%username, removed, "Game results cleared");
            }
        }
    }
}
