// Game score entity
// One immutable row per finished game

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScoreEntry {
    pub id: i64,
    pub user_id: i64,
    pub game_type: String,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub played_at: DateTime<Utc>,
}

/// A validated score waiting to be appended. The store assigns `id` and
/// `played_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGameScore {
    pub user_id: UserId,
    pub game_type: String,
    pub score: i64,
    pub details: Option<String>,
}
