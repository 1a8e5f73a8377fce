use tracing::{error, info};

use crate::{AppError, AppState};
use backend_domain::{AuthenticatedUser, ClaimOutcome, DailyBonusResponse, NewDailyBonusClaim};

pub async fn claim_daily_bonus(
    state: &AppState,
    user: &AuthenticatedUser,
) -> Result<DailyBonusResponse, AppError> {
    let claim = NewDailyBonusClaim {
        user_id: user.id,
        bonus_date: state.clock.today(),
        bonus_amount: state.config.daily_bonus_amount,
    };

    let outcome = state.bonus_repo.claim_once(&claim).await.map_err(|err| {
        error!(user_id = %user.id, "failed to claim daily bonus: {}", err);
        state.metrics.record_store_error();
        AppError::Internal(err)
    })?;

    match outcome {
        ClaimOutcome::Inserted(claim) => {
            info!(
                user_id = %user.id,
                bonus_date = %claim.bonus_date,
                amount = claim.bonus_amount,
                "daily bonus claimed"
            );
            state.metrics.record_bonus_claim();
            Ok(DailyBonusResponse {
                message: "Daily bonus claimed!".to_string(),
                amount: claim.bonus_amount,
            })
        }
        ClaimOutcome::AlreadyClaimed => {
            info!(user_id = %user.id, bonus_date = %claim.bonus_date, "daily bonus already claimed");
            state.metrics.record_bonus_conflict();
            Err(AppError::AlreadyClaimed)
        }
    }
}
