mod common;

use common::*;
use game_core::{
    DailyLimiter, GameEvent, GameEventBus, GameSession, GuessOutcome, StatisticsAggregator,
    validate_password, validate_username, AdminCredentials,
};
use game_types::{GameError, GameStatus, LetterStatus, MAX_ATTEMPTS};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_round_with_random_target() {
    let words = create_test_word_list();
    let mut rng = StdRng::seed_from_u64(1);
    let target = words.random_word(&mut rng).unwrap().to_string();

    let mut session = GameSession::new(target.clone());
    let outcome = play(&mut session, &[target.as_str()]).unwrap();

    assert!(matches!(outcome, GuessOutcome::Won(_)));
    assert_session_state(&session, GameStatus::Won, 1);
}

#[test]
fn test_lost_round_never_takes_sixth_guess() {
    let mut session = GameSession::new("CRANE");
    let outcome = play(&mut session, &["SLATE", "ROAST", "TOAST", "GHOST", "FROST"]).unwrap();

    assert!(matches!(outcome, GuessOutcome::Lost(_)));
    assert_session_state(&session, GameStatus::Lost, MAX_ATTEMPTS);

    assert_eq!(
        session.submit_guess("CRANE"),
        Err(GameError::GameAlreadyCompleted)
    );
    assert_session_state(&session, GameStatus::Lost, MAX_ATTEMPTS);
}

#[test]
fn test_board_rows_match_guesses() {
    let mut session = GameSession::new("ROAST");
    play(&mut session, &["toast", "boast"]);

    assert_eq!(session.board().len(), 2);
    assert_eq!(session.board()[0].word, "TOAST");
    // T appears later in ROAST
    assert_eq!(session.board()[0].letters[0].status, LetterStatus::Present);
    assert_eq!(session.board()[0].count(LetterStatus::Correct), 4);
}

#[test]
fn test_login_gate_examples() {
    assert!(validate_username("AB").is_err());
    assert!(validate_username("Admin").is_ok());
    assert!(validate_password("abc12$").is_ok());
    assert!(validate_password("abc123").is_err());

    let admin = AdminCredentials::default();
    assert!(admin.matches("Admin", "Admin123@"));
    assert!(!admin.matches("PlayerOne", "abc12$"));
}

#[test]
fn test_daily_limit_with_sessions() {
    let limiter = DailyLimiter::new();
    let mut identity = create_test_identity("PlayerOne");

    let mut started = 0;
    while limiter.try_start(&mut identity, test_day()).is_ok() {
        started += 1;
        assert!(identity.games_played_today <= 3);
    }
    assert_eq!(started, 3);

    let tomorrow = test_day().succ_opt().unwrap();
    assert!(limiter.try_start(&mut identity, tomorrow).is_ok());
    assert_eq!(identity.games_played_today, 1);
}

#[test]
fn test_statistics_over_played_rounds() {
    let results = vec![
        finished_result("PlayerOne", "CRANE", &["CRANE"], 0),
        finished_result("PlayerOne", "CRANE", &["SLATE", "ROAST", "TOAST", "GHOST", "FROST"], 1),
        finished_result("PlayerOne", "GHOST", &["ROAST", "GHOST"], 2),
    ];

    let report = StatisticsAggregator::compute(&results);
    assert_eq!(report.total_games, 3);
    assert_eq!(report.won_games, 2);
    assert_eq!(report.win_rate_percent, 66.7);
    assert_eq!(report.players[0].total, 3);
    assert_eq!(report.players[0].won, 2);
    assert_eq!(report.recent_results[0].word, "GHOST");
}

#[test]
fn test_round_ended_event_reaches_handlers() {
    let collector = EventCollector::new();
    let mut bus = GameEventBus::new();
    bus.add_handler(Box::new(collector.clone()));

    let mut session = GameSession::new("CRANE");
    let outcome = session.submit_guess("CRANE").unwrap();
    if outcome.is_round_over() {
        let result = session.to_result("PlayerOne", test_timestamp(5)).unwrap();
        bus.publish(GameEvent::RoundEnded {
            session_id: session.id(),
            result,
        });
    }

    assert_eq!(collector.event_count(), 1);
    assert!(collector.has_event_type(|e| matches!(e, GameEvent::RoundEnded { result, .. } if result.won)));
    assert_eq!(collector.get_events()[0].session_id(), Some(session.id()));
}
