use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::auth::{AuthError, AuthService};
use crate::error::ApiError;
use game_core::{
    Clock, DailyLimiter, EvaluationMode, GameEvent, GameEventBus, GameEventHandler, GameSession,
    LoggingEventHandler, StatisticsAggregator, SystemClock, WordList,
};
use game_persistence::KeyValueStore;
use game_persistence::repositories::{IdentityRepository, ResultRepository};
use game_types::{
    GameError, GameResult, GameSessionView, GuessResponse, Identity, PlayerSummary,
    StatisticsReport,
};

#[derive(Debug)]
struct ActiveRound {
    username: String,
    session: GameSession,
    // Finished round whose result has not reached the log yet
    pending_result: Option<GameResult>,
}

/// Owns the identity slot, the active round and the result log for one device.
pub struct GameManager {
    identities: IdentityRepository,
    results: ResultRepository,
    auth_service: AuthService,
    word_list: WordList,
    limiter: DailyLimiter,
    evaluation_mode: EvaluationMode,
    active_round: RwLock<Option<ActiveRound>>,
    event_bus: Mutex<GameEventBus>,
    clock: Arc<dyn Clock>,
}

impl GameManager {
    pub fn new(store: Arc<dyn KeyValueStore>, word_list: WordList) -> Self {
        let mut event_bus = GameEventBus::new();
        event_bus.add_handler(Box::new(LoggingEventHandler));

        Self {
            identities: IdentityRepository::new(store.clone()),
            results: ResultRepository::new(store),
            auth_service: AuthService::default(),
            word_list,
            limiter: DailyLimiter::new(),
            evaluation_mode: EvaluationMode::default(),
            active_round: RwLock::new(None),
            event_bus: Mutex::new(event_bus),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_limiter(mut self, limiter: DailyLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn with_evaluation_mode(mut self, mode: EvaluationMode) -> Self {
        self.evaluation_mode = mode;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_auth_service(mut self, auth_service: AuthService) -> Self {
        self.auth_service = auth_service;
        self
    }

    pub fn with_event_handler(mut self, handler: Box<dyn GameEventHandler>) -> Self {
        self.event_bus.get_mut().add_handler(handler);
        self
    }

    pub fn limiter(&self) -> &DailyLimiter {
        &self.limiter
    }

    /// Validate credentials and store the resulting identity.
    ///
    /// Logging in again under the stored username keeps that identity's daily
    /// counter, so the allowance cannot be refilled by re-entering credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, ApiError> {
        let today = self.clock.today();
        let mut identity = self.auth_service.authenticate(username, password, today)?;

        let previous = self.load_identity_or_reset().await?;
        if let Some(previous) = &previous {
            if previous.username == identity.username {
                identity.games_played_today = previous.games_played_today;
                identity.last_play_date = previous.last_play_date;
                self.limiter.refresh(&mut identity, today);
            }
        }

        let switched_user = previous.is_some_and(|p| p.username != identity.username);
        if switched_user {
            let mut active_round = self.active_round.write().await;
            self.flush_pending_result(active_round.as_mut()).await?;
            *active_round = None;
        }

        self.identities.save(&identity).await?;

        self.publish(GameEvent::LoggedIn {
            username: identity.username.clone(),
            is_admin: identity.is_admin,
        })
        .await;

        Ok(identity)
    }

    /// Forget the identity and any round in progress.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let previous = self.load_identity_or_reset().await?;
        let mut active_round = self.active_round.write().await;
        self.flush_pending_result(active_round.as_mut()).await?;
        self.identities.clear().await?;
        *active_round = None;
        drop(active_round);

        if let Some(identity) = previous {
            self.publish(GameEvent::LoggedOut {
                username: identity.username,
            })
            .await;
        }

        Ok(())
    }

    /// The stored identity with today's counter applied.
    pub async fn current_identity(&self) -> Result<Identity, ApiError> {
        let mut identity = self
            .load_identity_or_reset()
            .await?
            .ok_or(AuthError::NotLoggedIn)?;

        if self.limiter.refresh(&mut identity, self.clock.today()) {
            self.identities.save(&identity).await?;
        }

        Ok(identity)
    }

    /// Start a fresh round, consuming one play from today's allowance.
    pub async fn start_game(&self) -> Result<GameSessionView, ApiError> {
        let mut active_round = self.active_round.write().await;
        let mut identity = self.current_identity().await?;
        self.flush_pending_result(active_round.as_mut()).await?;

        let target = {
            let mut rng = rand::rng();
            self.word_list
                .random_word(&mut rng)
                .map(str::to_string)
                .ok_or(GameError::NoWordsAvailable)?
        };

        self.limiter.try_start(&mut identity, self.clock.today())?;
        self.identities.save(&identity).await?;

        if let Some(previous) = active_round.as_ref() {
            if !previous.session.is_over() {
                warn!(
                    "Abandoning unfinished round {} for {}",
                    previous.session.id(),
                    previous.username
                );
            }
        }

        let session = GameSession::with_mode(target, self.evaluation_mode);
        let view = session.view();
        let session_id = session.id();
        *active_round = Some(ActiveRound {
            username: identity.username.clone(),
            session,
            pending_result: None,
        });
        drop(active_round);

        self.publish(GameEvent::RoundStarted {
            session_id,
            username: identity.username,
            games_played_today: identity.games_played_today,
        })
        .await;

        Ok(view)
    }

    pub async fn session_view(&self) -> Result<GameSessionView, ApiError> {
        let identity = self.current_identity().await?;
        let active_round = self.active_round.read().await;

        match active_round.as_ref() {
            Some(round) if round.username == identity.username => Ok(round.session.view()),
            _ => Err(GameError::NoActiveGame.into()),
        }
    }

    /// Score a guess against the active round. The finished round is appended
    /// to the result log before the response is returned; if that write fails
    /// the result is kept and written again by the next request on the round.
    pub async fn submit_guess(&self, word: &str) -> Result<GuessResponse, ApiError> {
        let identity = self.current_identity().await?;
        let mut active_round = self.active_round.write().await;

        let round = match active_round.as_mut() {
            Some(round) if round.username == identity.username => round,
            _ => return Err(GameError::NoActiveGame.into()),
        };

        self.flush_pending_result(Some(&mut *round)).await?;
        let outcome = round.session.submit_guess(word)?;
        let session_id = round.session.id();

        self.publish(GameEvent::GuessAccepted {
            session_id,
            username: identity.username.clone(),
            guess: outcome.guess().clone(),
            attempts: round.session.attempts(),
        })
        .await;

        if outcome.is_round_over() {
            round.pending_result = round.session.to_result(&identity.username, self.clock.now());
            self.flush_pending_result(Some(&mut *round)).await?;
        }

        Ok(GuessResponse {
            guess: outcome.guess().clone(),
            session: round.session.view(),
        })
    }

    /// Aggregate report over every stored result. Admin only.
    pub async fn statistics(&self) -> Result<StatisticsReport, ApiError> {
        let identity = self.current_identity().await?;
        self.auth_service.require_admin(&identity)?;

        let results = self.load_results_or_reset().await?;
        Ok(StatisticsAggregator::compute(&results))
    }

    pub async fn player_summary(&self) -> Result<PlayerSummary, ApiError> {
        let identity = self.current_identity().await?;
        let results = self.load_results_or_reset().await?;

        Ok(StatisticsAggregator::player_summary(
            &results,
            &identity,
            &self.limiter,
            self.clock.today(),
        ))
    }

    /// Wipe the result log. Admin only, and only with explicit confirmation.
    pub async fn clear_results(&self, confirm: bool) -> Result<usize, ApiError> {
        let identity = self.current_identity().await?;
        self.auth_service.require_admin(&identity)?;

        if !confirm {
            return Err(ApiError::ConfirmationRequired);
        }

        let removed = self.load_results_or_reset().await?.len();
        self.results.clear().await?;
        info!("{} cleared {} stored results", identity.username, removed);

        self.publish(GameEvent::ResultsCleared {
            username: identity.username,
            removed,
        })
        .await;

        Ok(removed)
    }

    async fn publish(&self, event: GameEvent) {
        self.event_bus.lock().await.publish(event);
    }

    async fn load_identity_or_reset(&self) -> Result<Option<Identity>, ApiError> {
        match self.identities.load().await {
            Ok(identity) => Ok(identity),
            Err(err) if err.is_parse() => {
                warn!("Discarding unreadable identity record: {}", err);
                self.identities.clear().await?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn load_results_or_reset(&self) -> Result<Vec<GameResult>, ApiError> {
        match self.results.all().await {
            Ok(results) => Ok(results),
            Err(err) if err.is_parse() => {
                warn!("Discarding unreadable result log: {}", err);
                self.results.clear().await?;
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write a finished round's result to the log, then announce it.
    async fn flush_pending_result(&self, round: Option<&mut ActiveRound>) -> Result<(), ApiError> {
        let Some(round) = round else {
            return Ok(());
        };
        let Some(result) = round.pending_result.clone() else {
            return Ok(());
        };

        self.record_result(result.clone()).await?;
        round.pending_result = None;

        self.publish(GameEvent::RoundEnded {
            session_id: round.session.id(),
            result,
        })
        .await;
        Ok(())
    }

    async fn record_result(&self, result: GameResult) -> Result<(), ApiError> {
        match self.results.append(result.clone()).await {
            Ok(_) => Ok(()),
            Err(err) if err.is_parse() => {
                warn!("Result log was unreadable, starting a new one: {}", err);
                self.results.clear().await?;
                self.results.append(result).await?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
