use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    history::HistoryRecord,
    id::{SlotId, UserId},
    role::Role,
    slot::{
        event::{BookSlot, ReleaseSlot},
        LotSummary, Slot,
    },
};
use kernel::repository::ledger::LedgerRepository;
use shared::error::AppResult;

use crate::database::InMemoryDatabase;

#[derive(new)]
pub struct LedgerRepositoryImpl {
    db: InMemoryDatabase,
}

#[async_trait]
impl LedgerRepository for LedgerRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Slot>> {
        Ok(self.db.slots().read().await.clone())
    }

    async fn find_by_id(&self, slot_id: &SlotId) -> AppResult<Option<Slot>> {
        Ok(self
            .db
            .slots()
            .read()
            .await
            .iter()
            .find(|slot| &slot.slot_id == slot_id)
            .cloned())
    }

    async fn find_by_occupant(&self, user_id: &UserId) -> AppResult<Option<Slot>> {
        Ok(self
            .db
            .slots()
            .read()
            .await
            .iter()
            .find(|slot| slot.is_occupied_by(user_id))
            .cloned())
    }

    async fn lot_summaries(&self) -> AppResult<Vec<LotSummary>> {
        let slots = self.db.slots().read().await;

        // ロットは最初に現れた順に並べる
        let mut summaries: Vec<LotSummary> = Vec::new();
        for slot in slots.iter() {
            let index = match summaries.iter().position(|s| s.location == slot.location) {
                Some(index) => index,
                None => {
                    summaries.push(LotSummary {
                        location: slot.location.clone(),
                        free: 0,
                        total: 0,
                    });
                    summaries.len() - 1
                }
            };
            summaries[index].total += 1;
            if slot.is_available() {
                summaries[index].free += 1;
            }
        }
        Ok(summaries)
    }

    async fn book(&self, event: BookSlot) -> AppResult<()> {
        let BookSlot {
            slot_id,
            user_id,
            entry_time,
        } = event;
        let mut slots = self.db.slots().write().await;

        // 1 ユーザー 1 台まで。判定と予約は同じロックの中で行う
        if let Some(parked) = slots.iter().find(|slot| slot.is_occupied_by(&user_id)) {
            tracing::debug!(
                %slot_id,
                %user_id,
                parked_at = %parked.slot_id,
                "Booking ignored: user already parked"
            );
            return Ok(());
        }

        let Some(slot) = slots.iter_mut().find(|slot| slot.slot_id == slot_id) else {
            tracing::debug!(%slot_id, "Booking ignored: no such slot");
            return Ok(());
        };

        if slot.occupy(user_id.clone(), entry_time) {
            tracing::info!(%slot_id, %user_id, "Slot booked");
        } else {
            tracing::debug!(%slot_id, status = slot.status.as_ref(), "Booking ignored: slot not available");
        }
        Ok(())
    }

    async fn release(&self, event: ReleaseSlot) -> AppResult<Option<HistoryRecord>> {
        let ReleaseSlot {
            slot_id,
            released_by,
            role,
            exit_time,
        } = event;
        let mut slots = self.db.slots().write().await;

        let Some(slot) = slots.iter_mut().find(|slot| slot.slot_id == slot_id) else {
            tracing::debug!(%slot_id, "Release ignored: no such slot");
            return Ok(None);
        };

        // 他人の駐車を終了できるのはスタッフだけ
        if slot.occupancy.is_some() && !slot.is_occupied_by(&released_by) && role != Role::Staff
        {
            tracing::debug!(%slot_id, %released_by, "Release ignored: not the occupant");
            return Ok(None);
        }

        let record = slot.vacate(exit_time);
        match &record {
            Some(record) => tracing::info!(
                %slot_id,
                user_id = %record.user_id,
                charges = record.charges,
                "Slot released"
            ),
            None => tracing::debug!(%slot_id, "Release ignored: slot has no occupant"),
        }
        Ok(record)
    }

    async fn clear_all(&self) -> AppResult<()> {
        let mut slots = self.db.slots().write().await;
        slots.iter_mut().for_each(Slot::clear);
        tracing::info!(count = slots.len(), "All slots cleared");
        Ok(())
    }
}
