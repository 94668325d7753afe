use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{SlotId, UserId},
    slot::{LotSummary, Slot},
};
use serde::{Deserialize, Serialize};

use super::history::HistoryRecordResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SlotListQuery {
    #[garde(length(min = 1))]
    pub location: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub items: Vec<SlotResponse>,
}

impl From<Vec<Slot>> for SlotsResponse {
    fn from(value: Vec<Slot>) -> Self {
        Self {
            items: value.into_iter().map(SlotResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub id: SlotId,
    pub location: String,
    pub status: String,
    pub capacity: i32,
    pub vehicle_type: String,
    pub current_user_id: Option<UserId>,
    pub entry_time: Option<DateTime<Utc>>,
}

impl From<Slot> for SlotResponse {
    fn from(value: Slot) -> Self {
        let Slot {
            slot_id,
            location,
            status,
            capacity,
            vehicle_type,
            occupancy,
        } = value;
        let (current_user_id, entry_time) = match occupancy {
            Some(o) => (Some(o.user_id), Some(o.entry_time)),
            None => (None, None),
        };
        Self {
            id: slot_id,
            location,
            status: status.as_ref().to_string(),
            capacity,
            vehicle_type: vehicle_type.as_ref().to_string(),
            current_user_id,
            entry_time,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotsResponse {
    pub items: Vec<LotSummaryResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotSummaryResponse {
    pub location: String,
    pub free: usize,
    pub total: usize,
}

impl From<Vec<LotSummary>> for LotsResponse {
    fn from(value: Vec<LotSummary>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(|LotSummary { location, free, total }| LotSummaryResponse {
                    location,
                    free,
                    total,
                })
                .collect(),
        }
    }
}

// 何も解放しなかった場合 record は null
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResponse {
    pub record: Option<HistoryRecordResponse>,
}
