use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::{
        history::HistoryResponse,
        slot::SlotResponse,
        user::{DashboardResponse, UserResponse},
    },
};

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.user))
}

pub async fn show_history(user: AuthorizedUser) -> Json<HistoryResponse> {
    Json(HistoryResponse::from(user.user.history))
}

pub async fn show_dashboard(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DashboardResponse>> {
    let ledger = registry.ledger_repository();
    let available_slots = ledger
        .find_all()
        .await?
        .iter()
        .filter(|slot| slot.is_available())
        .count();
    let active_parking = ledger.find_by_occupant(user.id()).await?;

    Ok(Json(DashboardResponse {
        available_slots,
        total_visits: user.user.history.len(),
        hourly_rate: user.user.vehicle.vehicle_type.hourly_rate(),
        active_parking: active_parking.map(SlotResponse::from),
    }))
}
