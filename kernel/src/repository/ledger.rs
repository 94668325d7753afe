use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    history::HistoryRecord,
    id::{SlotId, UserId},
    slot::{
        event::{BookSlot, ReleaseSlot},
        LotSummary, Slot,
    },
};

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    // 全スロットを初期順のまま返す
    async fn find_all(&self) -> AppResult<Vec<Slot>>;
    async fn find_by_id(&self, slot_id: &SlotId) -> AppResult<Option<Slot>>;
    // ユーザーが現在駐車中のスロット
    async fn find_by_occupant(&self, user_id: &UserId) -> AppResult<Option<Slot>>;
    async fn lot_summaries(&self) -> AppResult<Vec<LotSummary>>;
    // 空いていない、または利用者が既に駐車中なら何もしない
    async fn book(&self, event: BookSlot) -> AppResult<()>;
    // 利用者がいない、または終了する権限がなければ None
    async fn release(&self, event: ReleaseSlot) -> AppResult<Option<HistoryRecord>>;
    // 全スロットを空きに戻す（課金しない）
    async fn clear_all(&self) -> AppResult<()>;
}
