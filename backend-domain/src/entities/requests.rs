// Request and response shapes shared by the application and HTTP layers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RecordScoreRequest {
    pub game_type: String,
    pub score: i64,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    pub game_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    pub game_type: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BonusHistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBonusResponse {
    pub message: String,
    pub amount: i64,
}

/// Compact score row returned by the legacy `GET /scores` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub id: i64,
    pub game_type: String,
    pub score: i64,
    pub played_at: DateTime<Utc>,
}

impl From<crate::entities::GameScoreEntry> for ScoreSummary {
    fn from(entry: crate::entities::GameScoreEntry) -> Self {
        Self {
            id: entry.id,
            game_type: entry.game_type,
            score: entry.score,
            played_at: entry.played_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouletteResult {
    pub symbol: String,
    pub won: bool,
    pub score: i64,
}
