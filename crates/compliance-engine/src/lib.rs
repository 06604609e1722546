pub mod classify;
pub mod coerce;
pub mod error;
pub mod limit;
pub mod reference;
pub mod report;

pub use classify::classify;
pub use coerce::coerce_numeric;
pub use error::EngineError;
pub use limit::parse_limit;
pub use reference::{GradeLimits, LimitCell, ReferenceRow, ReferenceTable};
pub use report::build_report;

use shared_types::{BunkerRecord, ComplianceReport};

/// SpecChecker entry point: a frozen reference table plus evaluation.
///
/// Construct once at startup and share read-only; evaluations are pure and
/// independent, so concurrent use needs no coordination.
pub struct SpecChecker {
    reference: ReferenceTable,
}

impl SpecChecker {
    /// Builds a checker over the embedded ISO 8217:2010 tables.
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            reference: ReferenceTable::load()?,
        })
    }

    pub fn with_table(reference: ReferenceTable) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    /// Evaluates one extracted bunker record, stamped with the current time.
    ///
    /// Fails for structural problems (empty grade, grade not in the
    /// reference tables); per-parameter anomalies are recorded in the
    /// report instead of aborting it. The clock is read here, at the
    /// boundary, so `build_report` itself stays a pure function.
    pub fn check_record(&self, record: &BunkerRecord) -> Result<ComplianceReport, EngineError> {
        if record.grade.trim().is_empty() {
            return Err(EngineError::InvalidRecord(
                "record has no fuel grade".to_string(),
            ));
        }

        let limits = self.reference.resolve(&record.grade)?;
        let checked_at = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default();
        Ok(build_report(
            &record.grade,
            &record.parameters,
            limits,
            checked_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{OverallResult, ParameterReading, VerdictKind};

    fn record(grade: &str, pairs: &[(&str, &str)]) -> BunkerRecord {
        BunkerRecord {
            vessel: "MV Test".to_string(),
            imo: "9999999".to_string(),
            port: "Singapore".to_string(),
            date: "2026-08-01".to_string(),
            grade: grade.to_string(),
            parameters: pairs
                .iter()
                .map(|(n, v)| ParameterReading::new(*n, *v))
                .collect(),
        }
    }

    #[test]
    fn test_check_record_within_spec() {
        let checker = SpecChecker::new().unwrap();
        let report = checker
            .check_record(&record(
                "DMA",
                &[("Viscosity", "4.5 cSt"), ("Flash Point", "72")],
            ))
            .unwrap();

        assert_eq!(report.overall, OverallResult::Pass);
        assert_eq!(report.count(VerdictKind::WithinSpec), 2);
    }

    #[test]
    fn test_check_record_off_spec() {
        let checker = SpecChecker::new().unwrap();
        let report = checker
            .check_record(&record("DMA", &[("Sulphur", "2.10 %m/m")]))
            .unwrap();

        assert_eq!(report.overall, OverallResult::Fail);
        assert_eq!(report.entries[0].verdict.kind, VerdictKind::OffSpec);
    }

    #[test]
    fn test_check_record_unknown_grade() {
        let checker = SpecChecker::new().unwrap();
        let err = checker
            .check_record(&record("XYZ999", &[("Viscosity", "4.5")]))
            .unwrap_err();

        assert!(matches!(err, EngineError::UnknownGrade(g) if g == "XYZ999"));
    }

    #[test]
    fn test_check_record_empty_grade() {
        let checker = SpecChecker::new().unwrap();
        let err = checker
            .check_record(&record("   ", &[("Viscosity", "4.5")]))
            .unwrap_err();

        assert!(matches!(err, EngineError::InvalidRecord(_)));
    }

    #[test]
    fn test_flash_point_missing_from_reference_row() {
        // "Flash Point" extracted but absent from the grade's row: surfaced
        // as no-reference, overall result unaffected.
        const ROWS: &[ReferenceRow] = &[ReferenceRow {
            grade: "RMT99",
            parameter: "Viscosity",
            limit: "≤180.0",
        }];
        let checker =
            SpecChecker::with_table(ReferenceTable::from_rows(&[], ROWS).unwrap());
        let report = checker
            .check_record(&record(
                "RMT99",
                &[("Viscosity", "100"), ("Flash Point", "70")],
            ))
            .unwrap();

        assert_eq!(report.entries[1].verdict.kind, VerdictKind::NoReference);
        assert_eq!(report.overall, OverallResult::Pass);
    }
}
