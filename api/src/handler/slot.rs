use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::SlotId,
    slot::event::{BookSlot, ReleaseSlot},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::slot::{LotsResponse, ReleaseResponse, SlotListQuery, SlotResponse, SlotsResponse},
};

pub async fn show_slot_list(
    _user: AuthorizedUser,
    Query(query): Query<SlotListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SlotsResponse>> {
    query.validate(&())?;

    let mut slots = registry.ledger_repository().find_all().await?;
    if let Some(location) = query.location {
        slots.retain(|slot| slot.location == location);
    }
    Ok(Json(SlotsResponse::from(slots)))
}

pub async fn show_lot_summaries(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<LotsResponse>> {
    registry
        .ledger_repository()
        .lot_summaries()
        .await
        .map(LotsResponse::from)
        .map(Json)
}

pub async fn show_slot(
    _user: AuthorizedUser,
    Path(slot_id): Path<SlotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SlotResponse>> {
    registry
        .ledger_repository()
        .find_by_id(&slot_id)
        .await
        .and_then(|slot| match slot {
            Some(slot) => Ok(Json(slot.into())),
            None => Err(AppError::EntityNotFound(format!("slot {slot_id} not found"))),
        })
}

// 予約できなかった場合もエラーにはせず、その時点のスロットを返す
pub async fn book_slot(
    user: AuthorizedUser,
    Path(slot_id): Path<SlotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SlotResponse>> {
    let ledger = registry.ledger_repository();

    // 駐車中のユーザーは 2 台目を予約できない（判定はリポジトリ側）
    ledger
        .book(BookSlot::new(slot_id.clone(), user.id().clone(), Utc::now()))
        .await?;

    ledger
        .find_by_id(&slot_id)
        .await?
        .map(|slot| Json(slot.into()))
        .ok_or_else(|| AppError::EntityNotFound(format!("slot {slot_id} not found")))
}

pub async fn release_slot(
    user: AuthorizedUser,
    Path(slot_id): Path<SlotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReleaseResponse>> {
    let ledger = registry.ledger_repository();

    if ledger.find_by_id(&slot_id).await?.is_none() {
        return Err(AppError::EntityNotFound(format!("slot {slot_id} not found")));
    }

    let record = ledger
        .release(ReleaseSlot::new(
            slot_id,
            user.id().clone(),
            user.user.role,
            Utc::now(),
        ))
        .await?;

    if let Some(record) = &record {
        registry
            .session_repository()
            .prepend_history(&record.user_id, record.clone())
            .await?;
    }

    Ok(Json(ReleaseResponse {
        record: record.map(Into::into),
    }))
}

pub async fn clear_all_slots(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_staff() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .ledger_repository()
        .clear_all()
        .await
        .map(|_| StatusCode::OK)
}
