use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("PDF contains no extractable text (scanned document?)")]
    NoText,

    #[error("Failed to render report PDF: {0}")]
    RenderError(String),
}
