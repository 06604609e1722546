//! Request/response models for the speccheck API

use serde::{Deserialize, Serialize};
use shared_types::{BunkerRecord, ComplianceReport};

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Base64-encoded bunker delivery note PDF.
    pub pdf_base64: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// The record as extracted from the document, for operator review.
    pub record: BunkerRecord,
    pub report: ComplianceReport,
    pub report_filename: String,
    /// Rendered compliance report, base64-encoded PDF.
    pub report_pdf_base64: String,
}

#[derive(Debug, Serialize)]
pub struct CheckRecordResponse {
    pub report: ComplianceReport,
}

#[derive(Debug, Serialize)]
pub struct GradesResponse {
    pub grades: Vec<String>,
}
