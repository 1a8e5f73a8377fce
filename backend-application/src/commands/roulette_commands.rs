use crate::commands::score_commands::append_score;
use crate::{AppError, AppState};
use backend_domain::services::roulette;
use backend_domain::{AuthenticatedUser, NewGameScore, RouletteResult};

pub async fn spin_roulette(
    state: &AppState,
    user: &AuthenticatedUser,
) -> Result<RouletteResult, AppError> {
    let outcome = roulette::spin(&mut rand::rng());

    append_score(
        state,
        &NewGameScore {
            user_id: user.id,
            game_type: roulette::ROULETTE_GAME_TYPE.to_string(),
            score: outcome.score,
            details: Some(outcome.details()),
        },
    )
    .await?;

    Ok(RouletteResult {
        symbol: outcome.symbol.to_string(),
        won: outcome.won,
        score: outcome.score,
    })
}
