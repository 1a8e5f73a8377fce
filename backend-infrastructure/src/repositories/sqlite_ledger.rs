use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use backend_domain::{
    ClaimOutcome, DailyBonusClaim, DailyBonusRepository, DbConfig, GameScoreEntry,
    GameScoreRepository, NewDailyBonusClaim, NewGameScore, ScoreAggregate, UserId,
};

use crate::utils::{current_millis, millis_to_utc};

/// SQLite-backed ledger holding both game scores and daily bonus claims.
#[derive(Clone)]
pub struct SqliteLedgerRepo {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct GameScoreRow {
    id: i64,
    user_id: i64,
    game_type: String,
    score: i64,
    details: Option<String>,
    played_at: i64,
}

impl From<GameScoreRow> for GameScoreEntry {
    fn from(row: GameScoreRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            game_type: row.game_type,
            score: row.score,
            details: row.details,
            played_at: millis_to_utc(row.played_at),
        }
    }
}

#[derive(sqlx::FromRow)]
struct DailyBonusRow {
    id: i64,
    user_id: i64,
    bonus_date: NaiveDate,
    bonus_amount: i64,
    received_at: i64,
}

impl From<DailyBonusRow> for DailyBonusClaim {
    fn from(row: DailyBonusRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            bonus_date: row.bonus_date,
            bonus_amount: row.bonus_amount,
            received_at: millis_to_utc(row.received_at),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AggregateRow {
    total_games: i64,
    total_score: i64,
    best_score: i64,
}

impl SqliteLedgerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `config.database_url`. An in-memory database lives
    /// only as long as its connection, so it is pinned to one connection that
    /// is never recycled.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let in_memory = config.database_url.contains(":memory:");
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { config.max_connections })
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        info!("connected to {}", config.database_url);
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl GameScoreRepository for SqliteLedgerRepo {
    async fn ensure_schema(&self) -> Result<()> {
        let create_scores = r#"
CREATE TABLE IF NOT EXISTS game_scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    game_type TEXT NOT NULL,
    score INTEGER NOT NULL CHECK (score >= 0),
    details TEXT,
    played_at INTEGER NOT NULL
)
"#;
        sqlx::query(create_scores).execute(&self.pool).await?;

        let create_scores_index = r#"
CREATE INDEX IF NOT EXISTS idx_game_scores_user_played
ON game_scores (user_id, game_type, played_at)
"#;
        sqlx::query(create_scores_index).execute(&self.pool).await?;

        let create_bonuses = r#"
CREATE TABLE IF NOT EXISTS daily_bonuses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    bonus_date TEXT NOT NULL,
    bonus_amount INTEGER NOT NULL,
    received_at INTEGER NOT NULL,
    UNIQUE (user_id, bonus_date)
)
"#;
        sqlx::query(create_bonuses).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_score(&self, score: &NewGameScore) -> Result<GameScoreEntry> {
        let row = sqlx::query_as::<_, GameScoreRow>(
            r#"
INSERT INTO game_scores (user_id, game_type, score, details, played_at)
VALUES (?1, ?2, ?3, ?4, ?5)
RETURNING id, user_id, game_type, score, details, played_at
"#,
        )
        .bind(score.user_id.0)
        .bind(&score.game_type)
        .bind(score.score)
        .bind(score.details.as_deref())
        .bind(current_millis())
        .fetch_one(&self.pool)
        .await?;
        debug!(user_id = row.user_id, id = row.id, "score inserted");
        Ok(row.into())
    }

    async fn aggregate_scores(
        &self,
        user_id: UserId,
        game_type: Option<&str>,
    ) -> Result<ScoreAggregate> {
        let row = sqlx::query_as::<_, AggregateRow>(
            r#"
SELECT
    COUNT(*) AS total_games,
    COALESCE(SUM(score), 0) AS total_score,
    COALESCE(MAX(score), 0) AS best_score
FROM game_scores
WHERE user_id = ?1 AND (?2 IS NULL OR game_type = ?2)
"#,
        )
        .bind(user_id.0)
        .bind(game_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(ScoreAggregate {
            count: row.total_games,
            sum: row.total_score,
            max: row.best_score,
        })
    }

    async fn fetch_recent_scores(
        &self,
        user_id: UserId,
        game_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<GameScoreEntry>> {
        let rows = sqlx::query_as::<_, GameScoreRow>(
            r#"
SELECT id, user_id, game_type, score, details, played_at
FROM game_scores
WHERE user_id = ?1 AND (?2 IS NULL OR game_type = ?2)
ORDER BY played_at DESC, id DESC
LIMIT ?3
"#,
        )
        .bind(user_id.0)
        .bind(game_type)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(GameScoreEntry::from).collect())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl DailyBonusRepository for SqliteLedgerRepo {
    async fn claim_once(&self, claim: &NewDailyBonusClaim) -> Result<ClaimOutcome> {
        let inserted = sqlx::query_as::<_, DailyBonusRow>(
            r#"
INSERT INTO daily_bonuses (user_id, bonus_date, bonus_amount, received_at)
SELECT ?1, ?2, ?3, ?4
WHERE NOT EXISTS (
    SELECT 1 FROM daily_bonuses WHERE user_id = ?1 AND bonus_date >= ?2
)
RETURNING id, user_id, bonus_date, bonus_amount, received_at
"#,
        )
        .bind(claim.user_id.0)
        .bind(claim.bonus_date)
        .bind(claim.bonus_amount)
        .bind(current_millis())
        .fetch_optional(&self.pool)
        .await;

        claim_outcome(claim.user_id, inserted)
    }

    async fn list_claims(&self, user_id: UserId, limit: usize) -> Result<Vec<DailyBonusClaim>> {
        let rows = sqlx::query_as::<_, DailyBonusRow>(
            r#"
SELECT id, user_id, bonus_date, bonus_amount, received_at
FROM daily_bonuses
WHERE user_id = ?1
ORDER BY bonus_date DESC, id DESC
LIMIT ?2
"#,
        )
        .bind(user_id.0)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(DailyBonusClaim::from).collect())
    }
}

/// A unique violation means a concurrent writer claimed the same day between
/// our existence check and the insert.
fn claim_outcome(
    user_id: UserId,
    inserted: std::result::Result<Option<DailyBonusRow>, sqlx::Error>,
) -> Result<ClaimOutcome> {
    match inserted {
        Ok(Some(row)) => Ok(ClaimOutcome::Inserted(row.into())),
        Ok(None) => Ok(ClaimOutcome::AlreadyClaimed),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            debug!(user_id = user_id.0, "claim lost to a concurrent insert");
            Ok(ClaimOutcome::AlreadyClaimed)
        }
        Err(err) => Err(err.into()),
    }
}
