use chrono::NaiveDate;
use game_types::{DAILY_GAME_LIMIT, GameError, Identity};

/// Per-identity budget of rounds that refills at the start of each calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyLimiter {
    limit: u32,
}

impl DailyLimiter {
    pub fn new() -> Self {
        Self {
            limit: DAILY_GAME_LIMIT,
        }
    }

    pub fn new_with_limit(limit: u32) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Reset the counter if the last play happened on another day.
    /// Returns true when the identity was modified.
    pub fn refresh(&self, identity: &mut Identity, today: NaiveDate) -> bool {
        if identity.last_play_date != today {
            identity.games_played_today = 0;
            identity.last_play_date = today;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self, identity: &Identity, today: NaiveDate) -> u32 {
        if identity.last_play_date != today {
            self.limit
        } else {
            self.limit.saturating_sub(identity.games_played_today)
        }
    }

    /// Consume one play for today, or fail when the budget is spent.
    pub fn try_start(&self, identity: &mut Identity, today: NaiveDate) -> Result<(), GameError> {
        self.refresh(identity, today);

        if identity.games_played_today >= self.limit {
            return Err(GameError::DailyLimitReached { limit: self.limit });
        }

        identity.games_played_today += 1;
        Ok(())
    }
}

impl Default for DailyLimiter {
    fn default() -> Self {
        Self::new()
    }
}
