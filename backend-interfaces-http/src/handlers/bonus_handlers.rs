use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::bonus_commands;
use backend_application::queries::bonus_queries;
use backend_application::AppState;
use backend_domain::{BonusHistoryQuery, DailyBonusClaim, DailyBonusResponse};

use crate::error::HttpError;
use crate::middleware::authenticate;

pub async fn claim_daily_bonus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DailyBonusResponse>, HttpError> {
    let user = authenticate(&state, &headers).await?;
    let response = bonus_commands::claim_daily_bonus(&state, &user).await?;
    Ok(Json(response))
}

pub async fn list_bonus_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BonusHistoryQuery>,
) -> Result<Json<Vec<DailyBonusClaim>>, HttpError> {
    let user = authenticate(&state, &headers).await?;
    let claims = bonus_queries::list_bonus_history(&state, &user, query).await?;
    Ok(Json(claims))
}
