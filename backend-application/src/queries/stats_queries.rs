use tracing::error;

use crate::{AppError, AppState};
use backend_domain::{
    AuthenticatedUser, GameScoreEntry, GameStats, HistoryQuery, ScoreSummary, StatsQuery,
};

pub const RECENT_GAMES_LIMIT: usize = 10;
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

pub async fn get_stats(
    state: &AppState,
    user: &AuthenticatedUser,
    query: StatsQuery,
) -> Result<GameStats, AppError> {
    let game_type = normalize_game_type(query.game_type);
    let aggregate = state
        .score_repo
        .aggregate_scores(user.id, game_type.as_deref())
        .await
        .map_err(|err| store_failure(state, "aggregate scores", err))?;
    let recent_games = state
        .score_repo
        .fetch_recent_scores(user.id, game_type.as_deref(), RECENT_GAMES_LIMIT)
        .await
        .map_err(|err| store_failure(state, "fetch recent scores", err))?;
    Ok(GameStats::from_aggregate(aggregate, recent_games))
}

pub async fn get_history(
    state: &AppState,
    user: &AuthenticatedUser,
    query: HistoryQuery,
) -> Result<Vec<GameScoreEntry>, AppError> {
    let game_type = normalize_game_type(query.game_type);
    let limit = clamp_limit(query.limit, DEFAULT_HISTORY_LIMIT, state.config.max_history_limit);
    state
        .score_repo
        .fetch_recent_scores(user.id, game_type.as_deref(), limit)
        .await
        .map_err(|err| store_failure(state, "fetch score history", err))
}

/// Last scores across every game type, in the compact legacy shape.
pub async fn list_recent_scores(
    state: &AppState,
    user: &AuthenticatedUser,
) -> Result<Vec<ScoreSummary>, AppError> {
    let entries = state
        .score_repo
        .fetch_recent_scores(user.id, None, DEFAULT_HISTORY_LIMIT)
        .await
        .map_err(|err| store_failure(state, "fetch recent scores", err))?;
    Ok(entries.into_iter().map(ScoreSummary::from).collect())
}

pub(crate) fn clamp_limit(requested: Option<usize>, default: usize, max: usize) -> usize {
    requested.unwrap_or(default).clamp(1, max.max(1))
}

/// Blank filters are treated as "all game types".
fn normalize_game_type(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub(crate) fn store_failure(state: &AppState, action: &str, err: anyhow::Error) -> AppError {
    error!("failed to {}: {}", action, err);
    state.metrics.record_store_error();
    AppError::Internal(err)
}
