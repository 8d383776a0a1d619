use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use infra::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        // Log the real error server-side; return a generic message to clients
        match e {
            StoreError::Unavailable(detail) => {
                tracing::error!("Store unavailable: {detail}");
                AppError::Unavailable("Storage backend is not reachable".to_string())
            }
            StoreError::Database(err) => {
                tracing::error!("Database error: {err}");
                AppError::Internal("Internal database error".to_string())
            }
            StoreError::Corrupt(detail) => {
                tracing::error!("Corrupt record: {detail}");
                AppError::Internal("Internal database error".to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
