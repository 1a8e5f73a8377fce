use chrono::{DateTime, Utc};

pub fn millis_to_utc(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_else(Utc::now)
}

pub fn current_millis() -> i64 {
    Utc::now().timestamp_millis()
}
