use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    history::HistoryRecord,
    insight::{ParkingReport, INSIGHT_FALLBACK},
    slot::Slot,
    user::User,
};
use kernel::repository::insight::InsightRepository;
use serde_json::json;
use shared::error::AppResult;

use crate::gemini::{
    model::{parking_report_schema, ParkingReportRow},
    GeminiClient,
};

// プロンプトに含める履歴の件数
const RECENT_HISTORY_LEN: usize = 5;

#[derive(new)]
pub struct InsightRepositoryImpl {
    client: GeminiClient,
}

#[async_trait]
impl InsightRepository for InsightRepositoryImpl {
    async fn parking_insight(
        &self,
        user: &User,
        slots: &[Slot],
        history: &[HistoryRecord],
    ) -> String {
        match self
            .client
            .generate_text(insight_prompt(user, slots, history))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error.message = %e, "Parking insight failed, using fallback");
                INSIGHT_FALLBACK.to_string()
            }
        }
    }

    async fn parking_report(&self, history: &[HistoryRecord]) -> AppResult<ParkingReport> {
        let prompt = format!(
            "Analyze this parking history data and generate a professional summary: {}",
            history_json(history)
        );
        self.client
            .generate_json::<ParkingReportRow>(prompt, parking_report_schema())
            .await
            .map(ParkingReport::from)
    }
}

fn insight_prompt(user: &User, slots: &[Slot], history: &[HistoryRecord]) -> String {
    let vehicle_type = user.vehicle.vehicle_type.as_ref();
    let slots = json!(slots
        .iter()
        .map(|slot| json!({
            "id": slot.slot_id,
            "loc": slot.location,
            "status": slot.status.as_ref(),
            "type": slot.vehicle_type.as_ref(),
        }))
        .collect::<Vec<_>>());
    // history は新しい順なので先頭から取る
    let recent = &history[..history.len().min(RECENT_HISTORY_LEN)];

    format!(
        "Context:\n\
         - User: {name} ({vehicle_type})\n\
         - Current Slots: {slots}\n\
         - User History: {history}\n\
         \n\
         Task:\n\
         Provide a short, 2-sentence smart parking insight for this user.\n\
         Mention the best slot for their {vehicle_type} and any patterns you see in their history.",
        name = user.user_name,
        history = history_json(recent),
    )
}

fn history_json(history: &[HistoryRecord]) -> serde_json::Value {
    json!(history
        .iter()
        .map(|record| json!({
            "id": record.history_id.to_string(),
            "userId": record.user_id,
            "slotId": record.slot_id,
            "location": record.location,
            "entryTime": record.entry_time.to_rfc3339(),
            "exitTime": record.exit_time.map(|t| t.to_rfc3339()),
            "charges": record.charges,
            "status": record.status.as_ref(),
        }))
        .collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use kernel::model::{
        history::HistoryStatus,
        id::{HistoryId, SlotId, UserId},
        role::Role,
    };
    use shared::{config::InsightConfig, error::AppError};

    use crate::database::seed::{initial_slots, mock_user};

    fn unreachable_client(api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(&InsightConfig {
            api_key: api_key.map(String::from),
            model: "gemini-test".into(),
            endpoint: "http://127.0.0.1:9".into(),
        })
    }

    fn records(count: usize) -> Vec<HistoryRecord> {
        let now = Utc::now();
        (0..count)
            .map(|i| HistoryRecord {
                history_id: HistoryId::new(),
                user_id: UserId::new("user-001"),
                slot_id: SlotId::new(format!("S{i}")),
                location: "Lot A".into(),
                entry_time: now - Duration::hours(2),
                exit_time: Some(now),
                charges: 4.0,
                status: HistoryStatus::Completed,
            })
            .collect()
    }

    #[tokio::test]
    async fn network_failure_returns_fallback() {
        let repo = InsightRepositoryImpl::new(unreachable_client(Some("test-key")));
        let user = mock_user(Role::Resident);

        let insight = repo
            .parking_insight(&user, &initial_slots(Utc::now()), &[])
            .await;
        assert_eq!(insight, "Optimize your parking with our AI-driven suggestions.");
    }

    #[tokio::test]
    async fn missing_key_returns_fallback() {
        let repo = InsightRepositoryImpl::new(unreachable_client(None));
        let insight = repo
            .parking_insight(&mock_user(Role::Resident), &[], &records(2))
            .await;
        assert_eq!(insight, INSIGHT_FALLBACK);
    }

    #[tokio::test]
    async fn report_failure_propagates() {
        let repo = InsightRepositoryImpl::new(unreachable_client(Some("test-key")));
        let res = repo.parking_report(&records(1)).await;
        assert!(matches!(res, Err(AppError::ExternalServiceError(_))));
    }

    #[test]
    fn prompt_describes_user_slots_and_recent_history() {
        let user = mock_user(Role::Resident);
        let history = records(7);
        let prompt = insight_prompt(&user, &initial_slots(Utc::now()), &history);

        assert!(prompt.contains("User: Alice Johnson (4W)"));
        assert!(prompt.contains(r#""id":"A3""#));
        assert!(prompt.contains(r#""status":"Occupied""#));
        assert!(prompt.contains(r#""slotId":"S4""#));
        assert!(!prompt.contains(r#""slotId":"S5""#));
    }
}
