use axum::Router;

use backend_application::AppState;

use crate::handlers::{bonus_handlers, game_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(ops_handlers::root))
        .route("/health", axum::routing::get(ops_handlers::health))
        .route(
            "/api/v1/games/scores",
            axum::routing::post(game_handlers::record_score).get(game_handlers::list_recent_scores),
        )
        .route(
            "/api/v1/games/stats",
            axum::routing::get(game_handlers::get_stats),
        )
        .route(
            "/api/v1/games/history",
            axum::routing::get(game_handlers::get_history),
        )
        .route(
            "/api/v1/games/roulette/spin",
            axum::routing::post(game_handlers::spin_roulette),
        )
        .route(
            "/api/v1/games/daily-bonus",
            axum::routing::post(bonus_handlers::claim_daily_bonus),
        )
        .route(
            "/api/v1/games/daily-bonus/history",
            axum::routing::get(bonus_handlers::list_bonus_history),
        )
        .route(
            "/api/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/api/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/api/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
