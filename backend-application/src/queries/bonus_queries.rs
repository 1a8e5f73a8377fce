use crate::queries::stats_queries::{clamp_limit, store_failure};
use crate::{AppError, AppState};
use backend_domain::{AuthenticatedUser, BonusHistoryQuery, DailyBonusClaim};

const DEFAULT_BONUS_HISTORY_LIMIT: usize = 30;

pub async fn list_bonus_history(
    state: &AppState,
    user: &AuthenticatedUser,
    query: BonusHistoryQuery,
) -> Result<Vec<DailyBonusClaim>, AppError> {
    let limit = clamp_limit(
        query.limit,
        DEFAULT_BONUS_HISTORY_LIMIT,
        state.config.max_history_limit,
    );
    state
        .bonus_repo
        .list_claims(user.id, limit)
        .await
        .map_err(|err| store_failure(state, "list daily bonus claims", err))
}
