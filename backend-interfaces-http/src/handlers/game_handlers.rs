use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use tracing::debug;

use backend_application::commands::{roulette_commands, score_commands};
use backend_application::queries::stats_queries;
use backend_application::AppState;
use backend_domain::{
    GameScoreEntry, GameStats, HistoryQuery, RecordScoreRequest, RouletteResult, ScoreSummary,
    StatsQuery,
};

use crate::error::HttpError;
use crate::middleware::authenticate;

pub async fn record_score(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RecordScoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GameScoreEntry>), HttpError> {
    let user = authenticate(&state, &headers).await?;
    let Json(payload) = payload.map_err(|rejection| {
        debug!(user_id = %user.id, "malformed score body: {}", rejection.body_text());
        state.metrics.record_validation_error();
        HttpError::from(rejection)
    })?;
    let entry = score_commands::record_score(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_recent_scores(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ScoreSummary>>, HttpError> {
    let user = authenticate(&state, &headers).await?;
    let scores = stats_queries::list_recent_scores(&state, &user).await?;
    Ok(Json(scores))
}

pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatsQuery>,
) -> Result<Json<GameStats>, HttpError> {
    let user = authenticate(&state, &headers).await?;
    let stats = stats_queries::get_stats(&state, &user, query).await?;
    Ok(Json(stats))
}

pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<GameScoreEntry>>, HttpError> {
    let user = authenticate(&state, &headers).await?;
    let history = stats_queries::get_history(&state, &user, query).await?;
    Ok(Json(history))
}

pub async fn spin_roulette(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RouletteResult>, HttpError> {
    let user = authenticate(&state, &headers).await?;
    let result = roulette_commands::spin_roulette(&state, &user).await?;
    Ok(Json(result))
}
