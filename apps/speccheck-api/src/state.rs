//! Application state for the speccheck API

use anyhow::Result;
use compliance_engine::SpecChecker;

use crate::extractor::FieldExtractor;

/// Built once at startup and shared read-only across requests. The
/// reference table inside the checker is frozen before the server starts
/// accepting connections.
pub struct AppState {
    pub checker: SpecChecker,
    pub extractor: FieldExtractor,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let checker = SpecChecker::new()?;
        tracing::info!(
            grades = checker.reference().grades().len(),
            "loaded ISO 8217:2010 reference tables"
        );

        let extractor = FieldExtractor::from_env()?;

        Ok(Self { checker, extractor })
    }
}
