#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use backend_application::{AppState, Metrics};
use backend_domain::{
    AuthenticatedUser, Clock, DbConfig, GameScoreRepository, RuntimeConfig, UserId,
};
use backend_infrastructure::{sign_token, HmacTokenAuthenticator, SqliteLedgerRepo};

pub const SECRET: &str = "test-secret";

/// Calendar that only moves when a test tells it to.
pub struct ManualClock {
    day: Mutex<NaiveDate>,
}

impl ManualClock {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day: Mutex::new(day),
        }
    }

    pub fn advance_days(&self, days: u64) {
        let mut day = self.day.lock().expect("clock lock");
        *day = *day + chrono::Days::new(days);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.day.lock().expect("clock lock")
    }
}

pub fn start_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("date")
}

pub async fn test_state(config: RuntimeConfig) -> (AppState, Arc<ManualClock>) {
    state_for_database(config, "sqlite::memory:", 1).await
}

/// State over a database file, so writers run on separate pooled connections.
pub async fn file_backed_state(
    config: RuntimeConfig,
    dir: &Path,
) -> (AppState, Arc<ManualClock>) {
    let url = format!("sqlite://{}?mode=rwc", dir.join("playlab.db").display());
    state_for_database(config, &url, 8).await
}

async fn state_for_database(
    config: RuntimeConfig,
    database_url: &str,
    max_connections: u32,
) -> (AppState, Arc<ManualClock>) {
    let repo = Arc::new(
        SqliteLedgerRepo::connect(&DbConfig {
            database_url: database_url.to_string(),
            max_connections,
        })
        .await
        .expect("connect"),
    );
    repo.ensure_schema().await.expect("schema");
    let clock = Arc::new(ManualClock::new(start_day()));

    let state = AppState {
        config,
        score_repo: repo.clone(),
        bonus_repo: repo,
        authenticator: Arc::new(HmacTokenAuthenticator::new(SECRET)),
        clock: clock.clone(),
        metrics: Arc::new(Metrics::default()),
    };
    (state, clock)
}

pub fn user(id: i64) -> AuthenticatedUser {
    AuthenticatedUser { id: UserId(id) }
}

pub fn token_for(id: i64) -> String {
    let expires_at = chrono::Utc::now().timestamp() + 3600;
    sign_token(SECRET, UserId(id), expires_at).expect("sign token")
}
