use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::insight::{InsightResponse, ParkingReportResponse},
};

// 失敗時も固定文言で 200 を返す
pub async fn show_insight(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<InsightResponse>> {
    if user.is_staff() {
        return Err(AppError::ForbiddenOperation);
    }

    let slots = registry.ledger_repository().find_all().await?;
    let insight = registry
        .insight_repository()
        .parking_insight(&user.user, &slots, &user.user.history)
        .await;

    Ok(Json(InsightResponse { insight }))
}

pub async fn show_report(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ParkingReportResponse>> {
    registry
        .insight_repository()
        .parking_report(&user.user.history)
        .await
        .map(ParkingReportResponse::from)
        .map(Json)
}
