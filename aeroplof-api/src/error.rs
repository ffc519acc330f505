use aeroplof_core::{CoreError, NO_INVENTORY};
use aeroplof_store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    NoInventory(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::NoInventory(msg) => {
                let body = Json(json!({
                    "error": msg,
                    "remaining": NO_INVENTORY,
                }));
                return (StatusCode::CONFLICT, body).into_response();
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDateFormat(_) | CoreError::ValidationError(_) => {
                AppError::ValidationError(err.to_string())
            }
            CoreError::FlightNotFound(_) => AppError::NotFoundError(err.to_string()),
            CoreError::NoFlightSelected => AppError::ConflictError(err.to_string()),
            CoreError::NoInventory { .. } => AppError::NoInventory(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
