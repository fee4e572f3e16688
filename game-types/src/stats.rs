use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::GameResult;

/// Win/loss tally for one player across the whole result log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlayerTally {
    pub username: String,
    pub total: usize,
    pub won: usize,
    pub win_rate_percent: f64,
    pub average_attempts: f64,
}

/// Aggregate view backing the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatisticsReport {
    pub total_games: usize,
    pub won_games: usize,
    pub win_rate: f64, // Fraction in [0, 1]
    pub win_rate_percent: f64,
    pub unique_players: usize,
    pub average_attempts: f64,
    pub players: Vec<PlayerTally>,
    pub recent_results: Vec<GameResult>,
}

/// Personal statistics for the logged-in player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlayerSummary {
    pub username: String,
    pub total_games: usize,
    pub games_won: usize,
    pub win_rate_percent: f64,
    pub average_attempts: f64,
    pub games_played_today: u32,
    pub daily_limit: u32,
}
