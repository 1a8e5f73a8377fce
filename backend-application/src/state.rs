use std::sync::Arc;

use backend_domain::ports::{Authenticator, Clock, DailyBonusRepository, GameScoreRepository};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub score_repo: Arc<dyn GameScoreRepository>,
    pub bonus_repo: Arc<dyn DailyBonusRepository>,
    pub authenticator: Arc<dyn Authenticator>,
    pub clock: Arc<dyn Clock>,
    pub metrics: Arc<Metrics>,
}
