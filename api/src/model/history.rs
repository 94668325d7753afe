use chrono::{DateTime, Utc};
use kernel::model::{
    history::HistoryRecord,
    id::{HistoryId, SlotId, UserId},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub items: Vec<HistoryRecordResponse>,
}

impl From<Vec<HistoryRecord>> for HistoryResponse {
    fn from(value: Vec<HistoryRecord>) -> Self {
        Self {
            items: value.into_iter().map(HistoryRecordResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordResponse {
    pub id: HistoryId,
    pub user_id: UserId,
    pub slot_id: SlotId,
    pub location: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub charges: f64,
    pub status: String,
}

impl From<HistoryRecord> for HistoryRecordResponse {
    fn from(value: HistoryRecord) -> Self {
        let HistoryRecord {
            history_id,
            user_id,
            slot_id,
            location,
            entry_time,
            exit_time,
            charges,
            status,
        } = value;
        Self {
            id: history_id,
            user_id,
            slot_id,
            location,
            entry_time,
            exit_time,
            charges,
            status: status.as_ref().to_string(),
        }
    }
}
