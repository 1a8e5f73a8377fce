use anyhow::{anyhow, Result};
use chrono::{FixedOffset, Local, NaiveDate, Utc};

use backend_domain::Clock;

/// Wall clock whose calendar day follows either a fixed UTC offset or, when
/// none is configured, the server's local time zone.
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(offset_minutes: Option<i32>) -> Result<Self> {
        let offset = match offset_minutes {
            Some(minutes) => Some(
                FixedOffset::east_opt(minutes * 60)
                    .ok_or_else(|| anyhow!("invalid utc offset: {} minutes", minutes))?,
            ),
            None => None,
        };
        Ok(Self { offset })
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_offset_day_matches_shifted_utc() {
        let clock = SystemClock::new(Some(9 * 60)).expect("clock");
        let before = (Utc::now() + chrono::Duration::hours(9)).date_naive();
        let today = clock.today();
        let after = (Utc::now() + chrono::Duration::hours(9)).date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn rejects_out_of_range_offset() {
        assert!(SystemClock::new(Some(48 * 60)).is_err());
    }
}
