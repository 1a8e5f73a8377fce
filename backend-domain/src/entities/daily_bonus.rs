// Daily bonus claim entity
// At most one claim per user and calendar day

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBonusClaim {
    pub id: i64,
    pub user_id: i64,
    pub bonus_date: NaiveDate,
    pub bonus_amount: i64,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDailyBonusClaim {
    pub user_id: UserId,
    pub bonus_date: NaiveDate,
    pub bonus_amount: i64,
}

/// Result of an insert-if-absent on `(user_id, bonus_date)`.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    Inserted(DailyBonusClaim),
    AlreadyClaimed,
}
