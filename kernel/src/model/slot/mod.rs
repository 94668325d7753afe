use chrono::{DateTime, Utc};
use strum::AsRefStr;

use super::{
    billing::compute_charge,
    history::{HistoryRecord, HistoryStatus},
    id::{HistoryId, SlotId, UserId},
    vehicle::VehicleType,
};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum SlotStatus {
    Available,
    Occupied,
    Reserved,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    pub user_id: UserId,
    pub entry_time: DateTime<Utc>,
}

// occupancy は status が Occupied のときだけ Some になる
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub slot_id: SlotId,
    pub location: String,
    pub status: SlotStatus,
    pub capacity: i32,
    pub vehicle_type: VehicleType,
    pub occupancy: Option<Occupancy>,
}

impl Slot {
    pub fn available(
        slot_id: impl Into<SlotId>,
        location: impl Into<String>,
        vehicle_type: VehicleType,
    ) -> Self {
        Self {
            slot_id: slot_id.into(),
            location: location.into(),
            status: SlotStatus::Available,
            capacity: 1,
            vehicle_type,
            occupancy: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }

    pub fn is_occupied_by(&self, user_id: &UserId) -> bool {
        self.occupancy
            .as_ref()
            .is_some_and(|occupancy| &occupancy.user_id == user_id)
    }

    // 空きのときだけ占有する。それ以外は何もせず false
    pub fn occupy(&mut self, user_id: UserId, entry_time: DateTime<Utc>) -> bool {
        if !self.is_available() {
            return false;
        }
        self.status = SlotStatus::Occupied;
        self.occupancy = Some(Occupancy {
            user_id,
            entry_time,
        });
        true
    }

    // 利用を終了して課金済みの履歴を返す
    pub fn vacate(&mut self, exit_time: DateTime<Utc>) -> Option<HistoryRecord> {
        let Occupancy {
            user_id,
            entry_time,
        } = self.occupancy.take()?;
        self.status = SlotStatus::Available;

        Some(HistoryRecord {
            history_id: HistoryId::new(),
            user_id,
            slot_id: self.slot_id.clone(),
            location: self.location.clone(),
            entry_time,
            exit_time: Some(exit_time),
            charges: compute_charge(self.vehicle_type, entry_time, exit_time),
            status: HistoryStatus::Completed,
        })
    }

    pub fn clear(&mut self) {
        self.status = SlotStatus::Available;
        self.occupancy = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotSummary {
    pub location: String,
    pub free: usize,
    pub total: usize,
}
