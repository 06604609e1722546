//! Text extraction from uploaded bunker delivery notes.

use crate::error::PdfError;
use pdf_extract::extract_text_from_mem;

/// Extracts the raw text content of a PDF.
///
/// The downstream field extractor only needs a string blob; no page
/// structure is preserved. Fails when the document yields no text at all,
/// which usually means a scanned note that would need OCR.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, PdfError> {
    let text = extract_text_from_mem(pdf_bytes).map_err(|e| PdfError::ParseError(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage_bytes() {
        let result = extract_text(b"not a pdf at all");
        assert!(matches!(result, Err(PdfError::ParseError(_))));
    }
}
