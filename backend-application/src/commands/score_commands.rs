use tracing::{error, warn};

use crate::{AppError, AppState};
use backend_domain::{AuthenticatedUser, GameScoreEntry, NewGameScore, RecordScoreRequest, RuntimeConfig};

pub const MAX_GAME_TYPE_CHARS: usize = 50;
/// Scores fit a 32-bit column so a user's total can never overflow the
/// 64-bit sum computed by the store.
pub const MAX_SCORE: i64 = i32::MAX as i64;

pub async fn record_score(
    state: &AppState,
    user: &AuthenticatedUser,
    payload: RecordScoreRequest,
) -> Result<GameScoreEntry, AppError> {
    let new_score = match validate_score(&state.config, user, payload) {
        Ok(score) => score,
        Err(err) => {
            warn!(user_id = %user.id, "rejected score: {}", err);
            state.metrics.record_validation_error();
            return Err(err);
        }
    };
    append_score(state, &new_score).await
}

/// Appends an already validated score. Game handlers that compute their own
/// outcome go through here.
pub(crate) async fn append_score(
    state: &AppState,
    new_score: &NewGameScore,
) -> Result<GameScoreEntry, AppError> {
    let entry = state
        .score_repo
        .insert_score(new_score)
        .await
        .map_err(|err| {
            error!(user_id = %new_score.user_id, "failed to insert score: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    state.metrics.record_score();
    Ok(entry)
}

pub fn validate_score(
    config: &RuntimeConfig,
    user: &AuthenticatedUser,
    payload: RecordScoreRequest,
) -> Result<NewGameScore, AppError> {
    let game_type = payload.game_type.trim();
    if game_type.is_empty() {
        return Err(AppError::BadRequest("game_type must not be empty".to_string()));
    }
    if game_type.chars().count() > MAX_GAME_TYPE_CHARS {
        return Err(AppError::BadRequest(format!(
            "game_type must be at most {} characters",
            MAX_GAME_TYPE_CHARS
        )));
    }
    if payload.score < 0 {
        return Err(AppError::BadRequest(format!(
            "score must be >= 0, got {}",
            payload.score
        )));
    }
    if payload.score > MAX_SCORE {
        return Err(AppError::BadRequest(format!(
            "score must be <= {}, got {}",
            MAX_SCORE, payload.score
        )));
    }
    if let Some(details) = &payload.details {
        if details.chars().count() > config.max_details_chars {
            return Err(AppError::BadRequest(format!(
                "details must be at most {} characters",
                config.max_details_chars
            )));
        }
    }
    Ok(NewGameScore {
        user_id: user.id,
        game_type: game_type.to_string(),
        score: payload.score,
        details: payload.details,
    })
}
