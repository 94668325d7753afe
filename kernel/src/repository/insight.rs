use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{history::HistoryRecord, insight::ParkingReport, slot::Slot, user::User};

#[async_trait]
pub trait InsightRepository: Send + Sync {
    // 失敗しても INSIGHT_FALLBACK を返す
    async fn parking_insight(&self, user: &User, slots: &[Slot], history: &[HistoryRecord])
        -> String;
    async fn parking_report(&self, history: &[HistoryRecord]) -> AppResult<ParkingReport>;
}
