use chrono::NaiveDate;
use game_types::{GameResult, Identity, PlayerSummary, PlayerTally, StatisticsReport};
use std::collections::HashMap;

use crate::DailyLimiter;

/// How many results the admin view lists as recent activity.
pub const RECENT_RESULTS_LIMIT: usize = 10;

pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// Aggregate the whole result log for the admin panel.
    pub fn compute(results: &[GameResult]) -> StatisticsReport {
        let total_games = results.len();
        let won_games = results.iter().filter(|r| r.won).count();
        let win_rate = ratio(won_games, total_games);

        let players = Self::player_tallies(results);

        let recent_results = results
            .iter()
            .rev()
            .take(RECENT_RESULTS_LIMIT)
            .cloned()
            .collect();

        StatisticsReport {
            total_games,
            won_games,
            win_rate,
            win_rate_percent: percent(win_rate),
            unique_players: players.len(),
            average_attempts: average_attempts(results.iter()),
            players,
            recent_results,
        }
    }

    /// Per-player tallies sorted by win ratio, best first.
    /// Players with equal ratios keep the order in which they first appear.
    pub fn player_tallies(results: &[GameResult]) -> Vec<PlayerTally> {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: HashMap<&str, Vec<&GameResult>> = HashMap::new();

        for result in results {
            let entry = grouped.entry(result.username.as_str()).or_insert_with(|| {
                order.push(result.username.as_str());
                Vec::new()
            });
            entry.push(result);
        }

        let mut tallies: Vec<(f64, PlayerTally)> = order
            .into_iter()
            .map(|username| {
                let games = &grouped[username];
                let total = games.len();
                let won = games.iter().filter(|r| r.won).count();
                let win_ratio = ratio(won, total);

                let tally = PlayerTally {
                    username: username.to_string(),
                    total,
                    won,
                    win_rate_percent: percent(win_ratio),
                    average_attempts: average_attempts(games.iter().copied()),
                };
                (win_ratio, tally)
            })
            .collect();

        tallies.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        tallies.into_iter().map(|(_, tally)| tally).collect()
    }

    /// Personal statistics for one identity.
    pub fn player_summary(
        results: &[GameResult],
        identity: &Identity,
        limiter: &DailyLimiter,
        today: NaiveDate,
    ) -> PlayerSummary {
        let games: Vec<&GameResult> = results
            .iter()
            .filter(|r| r.username == identity.username)
            .collect();
        let total_games = games.len();
        let games_won = games.iter().filter(|r| r.won).count();

        PlayerSummary {
            username: identity.username.clone(),
            total_games,
            games_won,
            win_rate_percent: percent(ratio(games_won, total_games)),
            average_attempts: average_attempts(games.into_iter()),
            games_played_today: if identity.last_play_date == today {
                identity.games_played_today
            } else {
                0
            },
            daily_limit: limiter.limit(),
        }
    }
}

/// `part / total`, or 0 when there is nothing to divide.
pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Convert a fraction to a percentage rounded to one decimal place.
pub fn percent(fraction: f64) -> f64 {
    round_one_decimal(fraction * 100.0)
}

fn average_attempts<'a>(results: impl Iterator<Item = &'a GameResult>) -> f64 {
    let (count, attempts) = results.fold((0usize, 0usize), |(count, attempts), r| {
        (count + 1, attempts + r.attempts)
    });
    round_one_decimal(ratio(attempts, count))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn result(username: &str, won: bool, attempts: usize, minute: u32) -> GameResult {
        GameResult {
            username: username.to_string(),
            word: "CRANE".to_string(),
            guesses: vec!["SLATE".to_string(); attempts],
            won,
            timestamp: Utc.with_ymd_and_hms(2026, 10, 18, 12, minute, 0).unwrap(),
            attempts,
        }
    }

    #[test]
    fn test_empty_log() {
        let report = StatisticsAggregator::compute(&[]);

        assert_eq!(report.total_games, 0);
        assert_eq!(report.won_games, 0);
        assert_eq!(report.win_rate, 0.0);
        assert_eq!(report.win_rate_percent, 0.0);
        assert_eq!(report.unique_players, 0);
        assert_eq!(report.average_attempts, 0.0);
        assert!(report.players.is_empty());
        assert!(report.recent_results.is_empty());
    }

    #[test]
    fn test_two_of_three_won() {
        let results = vec![
            result("PlayerOne", true, 3, 0),
            result("PlayerOne", false, 5, 1),
            result("PlayerOne", true, 4, 2),
        ];

        let report = StatisticsAggregator::compute(&results);
        assert_eq!(report.total_games, 3);
        assert_eq!(report.won_games, 2);
        assert!((report.win_rate - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(report.win_rate_percent, 66.7);
        assert_eq!(report.unique_players, 1);
        assert_eq!(report.average_attempts, 4.0);

        assert_eq!(report.players.len(), 1);
        assert_eq!(report.players[0].username, "PlayerOne");
        assert_eq!(report.players[0].total, 3);
        assert_eq!(report.players[0].won, 2);
        assert_eq!(report.players[0].win_rate_percent, 66.7);
    }

    #[test]
    fn test_players_sorted_by_win_ratio() {
        let results = vec![
            result("Lowest", false, 5, 0),
            result("Middle", true, 2, 1),
            result("Middle", false, 5, 2),
            result("Highest", true, 1, 3),
            result("AlsoMid", false, 5, 4),
            result("AlsoMid", true, 3, 5),
        ];

        let names: Vec<String> = StatisticsAggregator::player_tallies(&results)
            .into_iter()
            .map(|t| t.username)
            .collect();

        // Middle and AlsoMid tie at 50% and keep first-appearance order
        assert_eq!(names, vec!["Highest", "Middle", "AlsoMid", "Lowest"]);
    }

    #[test]
    fn test_recent_results_newest_first_and_capped() {
        let results: Vec<GameResult> = (0..15)
            .map(|i| result(&format!("Player{}", i), i % 2 == 0, 3, i))
            .collect();

        let report = StatisticsAggregator::compute(&results);
        assert_eq!(report.recent_results.len(), RECENT_RESULTS_LIMIT);
        assert_eq!(report.recent_results[0].username, "Player14");
        assert_eq!(report.recent_results[9].username, "Player5");
        assert_eq!(report.unique_players, 15);
    }

    #[test]
    fn test_player_summary() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut identity = Identity::new("PlayerOne", false, today);
        identity.games_played_today = 2;

        let results = vec![
            result("PlayerOne", true, 2, 0),
            result("Someone", true, 1, 1),
            result("PlayerOne", false, 5, 2),
        ];

        let limiter = DailyLimiter::new();
        let summary = StatisticsAggregator::player_summary(&results, &identity, &limiter, today);
        assert_eq!(summary.total_games, 2);
        assert_eq!(summary.games_won, 1);
        assert_eq!(summary.win_rate_percent, 50.0);
        assert_eq!(summary.average_attempts, 3.5);
        assert_eq!(summary.games_played_today, 2);
        assert_eq!(summary.daily_limit, 3);

        // A stale counter from yesterday reads as zero today
        let tomorrow = today.succ_opt().unwrap();
        let summary = StatisticsAggregator::player_summary(&results, &identity, &limiter, tomorrow);
        assert_eq!(summary.games_played_today, 0);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(ratio(1, 3)), 33.3);
        assert_eq!(percent(ratio(2, 3)), 66.7);
        assert_eq!(percent(ratio(0, 0)), 0.0);
        assert_eq!(percent(1.0), 100.0);
    }
}
