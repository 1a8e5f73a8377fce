use async_trait::async_trait;

use crate::entities::{
    ClaimOutcome,
    DailyBonusClaim,
    GameScoreEntry,
    NewDailyBonusClaim,
    NewGameScore,
    ScoreAggregate,
};
use crate::value_objects::UserId;

/// Append-only store of game scores.
///
/// Entries are never updated or deleted. `game_type = None` means every game
/// type; `Some` is an exact match.
#[async_trait]
pub trait GameScoreRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Appends one entry, assigning `id` and `played_at`.
    async fn insert_score(&self, score: &NewGameScore) -> anyhow::Result<GameScoreEntry>;

    async fn aggregate_scores(
        &self,
        user_id: UserId,
        game_type: Option<&str>,
    ) -> anyhow::Result<ScoreAggregate>;

    /// Most recent first, ties broken by id descending.
    async fn fetch_recent_scores(
        &self,
        user_id: UserId,
        game_type: Option<&str>,
        limit: usize,
    ) -> anyhow::Result<Vec<GameScoreEntry>>;

    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait DailyBonusRepository: Send + Sync {
    /// Atomically inserts the claim unless the user already holds one dated
    /// on or after `claim.bonus_date`. The store's uniqueness constraint on
    /// `(user_id, bonus_date)` is the final arbiter; losing a race yields
    /// `ClaimOutcome::AlreadyClaimed`, not an error.
    async fn claim_once(&self, claim: &NewDailyBonusClaim) -> anyhow::Result<ClaimOutcome>;

    async fn list_claims(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> anyhow::Result<Vec<DailyBonusClaim>>;
}
