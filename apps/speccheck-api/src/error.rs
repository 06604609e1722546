//! Error types for the speccheck API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use compliance_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Field extraction failed: {0}")]
    Extraction(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Pdf(#[from] bunker_pdf::PdfError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Extraction(msg) => {
                tracing::warn!("extraction failure: {}", msg);
                (StatusCode::BAD_GATEWAY, format!("Field extraction failed: {}", msg))
            }
            ApiError::Engine(EngineError::UnknownGrade(grade)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Fuel grade '{}' not found in reference tables", grade),
            ),
            ApiError::Engine(EngineError::InvalidRecord(msg)) => {
                (StatusCode::BAD_REQUEST, format!("Invalid record: {}", msg))
            }
            ApiError::Engine(e) => {
                tracing::error!("engine error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Engine error".to_string())
            }
            ApiError::Pdf(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Internal(e) => {
                tracing::error!("internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
