use chrono::{DateTime, Utc};
use strum::AsRefStr;

use super::id::{HistoryId, SlotId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum HistoryStatus {
    Active,
    Completed,
}

// 終了した駐車 1 回分。解放時に作られ、以後は変更しない
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub history_id: HistoryId,
    pub user_id: UserId,
    pub slot_id: SlotId,
    pub location: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub charges: f64,
    pub status: HistoryStatus,
}
