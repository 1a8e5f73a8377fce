// Runtime configuration snapshot handed to the application layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub daily_bonus_amount: i64,
    pub bonus_utc_offset_minutes: Option<i32>,
    pub max_details_chars: usize,
    pub max_history_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
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

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}
