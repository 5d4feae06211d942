use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

pub const STATUS_OK: &str = "Ok";
pub const STATUS_ERROR: &str = "Error";

#[derive(Debug, ThisError)]
pub enum RollcallError {
    #[error("empty body")]
    EmptyBody,

    #[error("invalid request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid student id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    Validation(String),

    #[error("no updatable field provided")]
    NoUpdatableField,

    #[error("student not found")]
    StudentNotFound,

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl IntoResponse for RollcallError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RollcallError::EmptyBody
            | RollcallError::Json(_)
            | RollcallError::InvalidId(_)
            | RollcallError::Validation(_)
            | RollcallError::NoUpdatableField => StatusCode::BAD_REQUEST,
            RollcallError::StudentNotFound => StatusCode::NOT_FOUND,
            RollcallError::Database(_) | RollcallError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            status: STATUS_ERROR,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized error response body: `{"status":"Error","error":"..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

/// Success envelope for operations with no record to return (e.g. delete).
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: STATUS_OK }
    }
}
