use anyhow::{anyhow, Result};

/// Widest real-world UTC offsets are -12:00 and +14:00.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

pub fn validate_database_url(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("database_url is empty"));
    }
    if !value.starts_with("sqlite:") {
        return Err(anyhow!("database_url must use the sqlite: scheme"));
    }
    Ok(())
}

pub fn validate_utc_offset_minutes(value: i32) -> Result<()> {
    if value.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(anyhow!(
            "bonus_utc_offset_minutes must be within +/-{}",
            MAX_UTC_OFFSET_MINUTES
        ));
    }
    Ok(())
}
