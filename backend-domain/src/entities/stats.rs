// Aggregate statistics over a user's score history

use serde::{Deserialize, Serialize};

use crate::entities::GameScoreEntry;

/// Raw count/sum/max as returned by the store. Sum and max are zero when
/// nothing matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAggregate {
    pub count: i64,
    pub sum: i64,
    pub max: i64,
}

impl ScoreAggregate {
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: i64,
    pub total_score: i64,
    pub best_score: i64,
    pub average_score: f64,
    pub recent_games: Vec<GameScoreEntry>,
}

impl GameStats {
    pub fn from_aggregate(aggregate: ScoreAggregate, recent_games: Vec<GameScoreEntry>) -> Self {
        Self {
            total_games: aggregate.count,
            total_score: aggregate.sum,
            best_score: aggregate.max,
            average_score: aggregate.average(),
            recent_games,
        }
    }
}
