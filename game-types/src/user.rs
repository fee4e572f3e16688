use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Maximum number of rounds an identity may start per calendar day.
pub const DAILY_GAME_LIMIT: u32 = 3;

/// The logged-in player, persisted in the single identity slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Identity {
    pub username: String,
    pub is_admin: bool,
    pub games_played_today: u32,
    #[serde(deserialize_with = "deserialize_play_date")]
    pub last_play_date: NaiveDate,
}

/// Format used by `Date.prototype.toDateString`, e.g. "Sun Oct 18 2026".
const BROWSER_DATE_FORMAT: &str = "%a %b %d %Y";

/// Accepts ISO dates and records written by the browser client.
fn deserialize_play_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<NaiveDate>()
        .or_else(|_| NaiveDate::parse_from_str(&raw, BROWSER_DATE_FORMAT))
        .map_err(|_| serde::de::Error::custom(format!("invalid play date: {}", raw)))
}

impl Identity {
    pub fn new(username: impl Into<String>, is_admin: bool, today: NaiveDate) -> Self {
        Self {
            username: username.into(),
            is_admin,
            games_played_today: 0,
            last_play_date: today,
        }
    }
}
