use std::sync::Arc;

use anyhow::{anyhow, Result};

use backend_application::{AppState, Metrics};
use backend_domain::GameScoreRepository;
use backend_infrastructure::{AppConfig, HmacTokenAuthenticator, SqliteLedgerRepo, SystemClock};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let repo = Arc::new(SqliteLedgerRepo::connect(&db_config).await?);
        repo.ensure_schema().await?;

        let secret = config
            .auth_secret
            .clone()
            .ok_or_else(|| anyhow!("auth_secret must be set"))?;
        let clock = SystemClock::new(runtime_config.bonus_utc_offset_minutes)?;

        let state = AppState {
            config: runtime_config,
            score_repo: repo.clone(),
            bonus_repo: repo,
            authenticator: Arc::new(HmacTokenAuthenticator::new(secret)),
            clock: Arc::new(clock),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
