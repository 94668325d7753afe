use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("external service call failed: {0}")]
    ExternalServiceError(String),
    #[error("authentication required")]
    UnauthenticatedError,
    #[error("invalid access token")]
    UnauthorizedError,
    #[error("operation not permitted for this role")]
    ForbiddenOperation,
    #[error("{0}")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError | AppError::UnauthorizedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            e @ AppError::ExternalServiceError(_) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "External service error"
                );
                StatusCode::BAD_GATEWAY
            }
            e @ AppError::InternalError(_) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_status_codes() {
        let cases = [
            (AppError::EntityNotFound("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::UnprocessableEntity("bad body".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::UnauthorizedError, StatusCode::UNAUTHORIZED),
            (AppError::ForbiddenOperation, StatusCode::FORBIDDEN),
            (
                AppError::ExternalServiceError("down".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::InternalError(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
