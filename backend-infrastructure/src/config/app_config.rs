use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{DbConfig, RuntimeConfig};

use crate::config::validation::{validate_database_url, validate_utc_offset_minutes};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub auth_secret: Option<String>,
    pub daily_bonus_amount: i64,
    pub bonus_utc_offset_minutes: Option<i32>,
    pub max_details_chars: usize,
    pub max_history_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            database_url: "sqlite://playlab.db?mode=rwc".to_string(),
            database_max_connections: 5,
            auth_secret: None,
            daily_bonus_amount: 100,
            bonus_utc_offset_minutes: None,
            max_details_chars: 500,
            max_history_limit: 100,
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 15,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("PLAYLAB_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(secret) = &self.auth_secret {
            if secret.trim().is_empty() {
                self.auth_secret = None;
            }
        }
        self.database_url = self.database_url.trim().to_string();
        self.cors_allowed_origins = normalize_origin_list(std::mem::take(&mut self.cors_allowed_origins));
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_database_url(&self.database_url)?;
        if self.database_max_connections == 0 {
            return Err(anyhow!("database_max_connections must be greater than 0"));
        }
        if self.auth_secret.is_none() {
            return Err(anyhow!("auth_secret must be set"));
        }
        if self.daily_bonus_amount <= 0 {
            return Err(anyhow!("daily_bonus_amount must be greater than 0"));
        }
        if let Some(offset) = self.bonus_utc_offset_minutes {
            validate_utc_offset_minutes(offset)?;
        }
        if self.max_details_chars == 0 {
            return Err(anyhow!("max_details_chars must be greater than 0"));
        }
        if self.max_history_limit == 0 {
            return Err(anyhow!("max_history_limit must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            daily_bonus_amount: self.daily_bonus_amount,
            bonus_utc_offset_minutes: self.bonus_utc_offset_minutes,
            max_details_chars: self.max_details_chars,
            max_history_limit: self.max_history_limit,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            cors_allowed_origins: self.cors_allowed_origins.clone(),
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            database_url: self.database_url.clone(),
            max_connections: self.database_max_connections,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Applies `PLAYLAB_*` overrides. A value that fails to parse keeps the
    /// current setting.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("PLAYLAB_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("PLAYLAB_DATABASE_URL") {
            self.database_url = value;
        }
        if let Some(value) = lookup("PLAYLAB_DATABASE_MAX_CONNECTIONS") {
            self.database_max_connections =
                parse_or_keep("PLAYLAB_DATABASE_MAX_CONNECTIONS", &value, self.database_max_connections);
        }
        if let Some(value) = lookup("PLAYLAB_AUTH_SECRET") {
            self.auth_secret = Some(value);
        }
        if let Some(value) = lookup("PLAYLAB_DAILY_BONUS_AMOUNT") {
            self.daily_bonus_amount =
                parse_or_keep("PLAYLAB_DAILY_BONUS_AMOUNT", &value, self.daily_bonus_amount);
        }
        if let Some(value) = lookup("PLAYLAB_BONUS_UTC_OFFSET_MINUTES") {
            match value.trim().parse::<i32>() {
                Ok(offset) => self.bonus_utc_offset_minutes = Some(offset),
                Err(err) => warn!(
                    "ignoring PLAYLAB_BONUS_UTC_OFFSET_MINUTES='{}': {}",
                    value, err
                ),
            }
        }
        if let Some(value) = lookup("PLAYLAB_MAX_DETAILS_CHARS") {
            self.max_details_chars =
                parse_or_keep("PLAYLAB_MAX_DETAILS_CHARS", &value, self.max_details_chars);
        }
        if let Some(value) = lookup("PLAYLAB_MAX_HISTORY_LIMIT") {
            self.max_history_limit =
                parse_or_keep("PLAYLAB_MAX_HISTORY_LIMIT", &value, self.max_history_limit);
        }
        if let Some(value) = lookup("PLAYLAB_MAX_BODY_BYTES") {
            self.max_body_bytes = parse_or_keep("PLAYLAB_MAX_BODY_BYTES", &value, self.max_body_bytes);
        }
        if let Some(value) = lookup("PLAYLAB_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds =
                parse_or_keep("PLAYLAB_REQUEST_TIMEOUT_SECONDS", &value, self.request_timeout_seconds);
        }
        if let Some(value) = lookup("PLAYLAB_CORS_ALLOWED_ORIGINS") {
            self.cors_allowed_origins = parse_env_list(&value);
        }
    }
}

fn parse_or_keep<T>(key: &str, value: &str, current: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.trim().parse::<T>() {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("ignoring {}='{}': {}", key, value, err);
            current
        }
    }
}

fn parse_env_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn normalize_origin_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = values
        .into_iter()
        .map(|item| item.trim().trim_end_matches('/').to_string())
        .filter(|item| !item.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
