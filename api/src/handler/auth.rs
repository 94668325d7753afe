use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::auth::{LoginRequest, LoginResponse},
};

pub async fn login(
    State(registry): State<AppRegistry>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    // 未知のロールなどで読めないボディは 422 にそろえる
    let Json(req) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;
    req.validate(&())?;

    let session = registry.session_repository().login(req.role.into()).await?;

    Ok(Json(LoginResponse {
        access_token: session.access_token.0,
        user: session.user.into(),
    }))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .session_repository()
        .logout(&user.access_token)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
