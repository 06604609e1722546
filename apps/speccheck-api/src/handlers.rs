//! HTTP handlers for the speccheck API

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use std::sync::Arc;

use crate::error::ApiError;
use crate::extractor::validate_record;
use crate::models::{CheckRecordResponse, CheckRequest, CheckResponse, GradesResponse};
use crate::state::AppState;
use shared_types::BunkerRecord;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Full pipeline: PDF in, compliance report (JSON + rendered PDF) out.
pub async fn check(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let pdf_data = BASE64
        .decode(&req.pdf_base64)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid PDF base64: {}", e)))?;

    let text = bunker_pdf::extract_text(&pdf_data)?;
    let record = state.extractor.extract(&text).await?;
    let report = state.checker.check_record(&record)?;

    let report_pdf = bunker_pdf::render_report(&record, &report)?;
    let report_filename = bunker_pdf::report_filename(&record, Utc::now());

    tracing::info!(
        vessel = %record.vessel,
        grade = %report.grade,
        overall = ?report.overall,
        "delivery checked"
    );

    Ok(Json(CheckResponse {
        record,
        report,
        report_filename,
        report_pdf_base64: BASE64.encode(&report_pdf),
    }))
}

/// Evaluates an already-extracted record, bypassing PDF and LLM steps.
pub async fn check_record(
    State(state): State<Arc<AppState>>,
    Json(record): Json<BunkerRecord>,
) -> Result<Json<CheckRecordResponse>, ApiError> {
    validate_record(&record)?;
    let report = state.checker.check_record(&record)?;
    Ok(Json(CheckRecordResponse { report }))
}

/// Lists the fuel grades present in the merged reference table.
pub async fn grades(State(state): State<Arc<AppState>>) -> Json<GradesResponse> {
    Json(GradesResponse {
        grades: state
            .checker
            .reference()
            .grades()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
