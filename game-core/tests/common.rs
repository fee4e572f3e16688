#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use game_core::{GameEvent, GameEventHandler, GameSession, GuessOutcome, WordList};
use game_types::{GameResult, GameStatus, Identity};
use std::sync::{Arc, Mutex};

/// Creates a test word list with a known set of words
pub fn create_test_word_list() -> WordList {
    WordList::from_word_list("crane\nslate\nroast\ntoast\nghost\nfrost\ntrust\nblast")
}

/// Fixed calendar day used across tests
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn test_timestamp(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, minute, 0).unwrap()
}

pub fn create_test_identity(name: &str) -> Identity {
    Identity::new(name, false, test_day())
}

/// Plays the given guesses in order and returns the last outcome
pub fn play(session: &mut GameSession, guesses: &[&str]) -> Option<GuessOutcome> {
    let mut last = None;
    for guess in guesses {
        last = Some(session.submit_guess(guess).unwrap());
    }
    last
}

/// Plays a full round and returns its result record
pub fn finished_result(username: &str, target: &str, guesses: &[&str], minute: u32) -> GameResult {
    let mut session = GameSession::new(target);
    play(&mut session, guesses);
    session
        .to_result(username, test_timestamp(minute))
        .expect("round should be over")
}

/// Asserts that a session is in a specific state
pub fn assert_session_state(session: &GameSession, expected_status: GameStatus, expected_attempts: usize) {
    assert_eq!(
        session.status(),
        expected_status,
        "Expected status {:?}, got {:?}",
        expected_status,
        session.status()
    );
    assert_eq!(
        session.attempts(),
        expected_attempts,
        "Expected {} attempts, got {}",
        expected_attempts,
        session.attempts()
    );
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}
