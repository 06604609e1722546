//! Report aggregation: every reading classified, one overall verdict.

use crate::classify::classify;
use crate::coerce::coerce_numeric;
use crate::reference::GradeLimits;
use shared_types::{
    ComplianceReport, OverallResult, ParameterReading, ReportEntry, Verdict, VerdictKind,
};

/// Evaluates a sequence of readings against a resolved reference row.
///
/// Readings are processed in their given order (extraction order, kept for
/// traceability against the source document). The overall result is `Fail`
/// iff at least one verdict is off-spec; unverifiable and no-reference
/// entries are surfaced but never fail the delivery on their own. Partial
/// compliance is not a recognized overall state.
///
/// `checked_at` is supplied by the caller: the same input always produces
/// the same report, with no clock read hidden in the evaluation.
pub fn build_report(
    grade: &str,
    readings: &[ParameterReading],
    limits: &GradeLimits,
    checked_at: u64,
) -> ComplianceReport {
    let mut entries = Vec::with_capacity(readings.len());

    for reading in readings {
        let value = coerce_numeric(&reading.value);
        let cell = limits.get(&reading.name);

        let (kind, limit) = match cell {
            None => (VerdictKind::NoReference, None),
            Some(cell) => match cell.parsed {
                Some(limit) => (classify(value, Some(&limit)), Some(limit)),
                // Malformed reference cell: nothing to check against, so
                // this entry degrades to a manual check instead of
                // aborting the rest of the report.
                None => (VerdictKind::Unverifiable, None),
            },
        };

        entries.push(ReportEntry {
            parameter: reading.name.clone(),
            verdict: Verdict {
                kind,
                raw_value: reading.value.clone(),
                value,
                limit,
            },
        });
    }

    let overall = if entries
        .iter()
        .any(|e| e.verdict.kind == VerdictKind::OffSpec)
    {
        OverallResult::Fail
    } else {
        OverallResult::Pass
    };

    ComplianceReport {
        grade: crate::reference::normalize_grade(grade),
        entries,
        overall,
        checked_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{ReferenceRow, ReferenceTable};
    use pretty_assertions::assert_eq;
    use shared_types::LimitExpression;

    const ROWS: &[ReferenceRow] = &[
        ReferenceRow {
            grade: "RME180",
            parameter: "Viscosity",
            limit: "≤180.0",
        },
        ReferenceRow {
            grade: "RME180",
            parameter: "Flash Point",
            limit: "≥60",
        },
        ReferenceRow {
            grade: "RME180",
            parameter: "Sulphur",
            limit: "-",
        },
        ReferenceRow {
            grade: "RME180",
            parameter: "Water",
            limit: "≤xyz",
        },
    ];

    fn table() -> ReferenceTable {
        ReferenceTable::from_rows(&[], ROWS).unwrap()
    }

    fn readings(pairs: &[(&str, &str)]) -> Vec<ParameterReading> {
        pairs
            .iter()
            .map(|(n, v)| ParameterReading::new(*n, *v))
            .collect()
    }

    #[test]
    fn test_all_within_spec_passes() {
        let table = table();
        let limits = table.resolve("RME180").unwrap();
        let report = build_report(
            "rme180",
            &readings(&[("Viscosity", "175.2 cSt"), ("Flash Point", "92")]),
            limits,
            0,
        );

        assert_eq!(report.grade, "RME180");
        assert_eq!(report.overall, OverallResult::Pass);
        assert!(report
            .entries
            .iter()
            .all(|e| e.verdict.kind == VerdictKind::WithinSpec));
    }

    #[test]
    fn test_one_off_spec_fails_overall() {
        let table = table();
        let limits = table.resolve("RME180").unwrap();
        let report = build_report(
            "RME180",
            &readings(&[("Viscosity", "175.2"), ("Flash Point", "55")]),
            limits,
            0,
        );

        assert_eq!(report.overall, OverallResult::Fail);
        assert_eq!(report.count(VerdictKind::OffSpec), 1);
    }

    #[test]
    fn test_anomalies_alone_do_not_fail() {
        let table = table();
        let limits = table.resolve("RME180").unwrap();
        let report = build_report(
            "RME180",
            &readings(&[
                ("Flash Point", "abc"),        // unverifiable value
                ("Cloud Point", "-14"),        // not in the reference row
                ("Sulphur", "2.8"),            // unbounded limit
                ("Water", "0.2"),              // malformed reference cell
            ]),
            limits,
            0,
        );

        assert_eq!(report.overall, OverallResult::Pass);
        assert_eq!(report.entries[0].verdict.kind, VerdictKind::Unverifiable);
        assert_eq!(report.entries[1].verdict.kind, VerdictKind::NoReference);
        assert_eq!(report.entries[2].verdict.kind, VerdictKind::NoLimit);
        assert_eq!(report.entries[3].verdict.kind, VerdictKind::Unverifiable);
    }

    #[test]
    fn test_entries_preserve_extraction_order() {
        let table = table();
        let limits = table.resolve("RME180").unwrap();
        let report = build_report(
            "RME180",
            &readings(&[("Flash Point", "70"), ("Viscosity", "100")]),
            limits,
            0,
        );

        assert_eq!(report.entries[0].parameter, "Flash Point");
        assert_eq!(report.entries[1].parameter, "Viscosity");
    }

    #[test]
    fn test_verdict_carries_audit_fields() {
        let table = table();
        let limits = table.resolve("RME180").unwrap();
        let report = build_report("RME180", &readings(&[("Viscosity", "390 cSt")]), limits, 0);

        let verdict = &report.entries[0].verdict;
        assert_eq!(verdict.kind, VerdictKind::OffSpec);
        assert_eq!(verdict.raw_value, "390 cSt");
        assert_eq!(verdict.value, Some(390.0));
        assert_eq!(verdict.limit, Some(LimitExpression::UpperBound { max: 180.0 }));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let table = table();
        let limits = table.resolve("RME180").unwrap();
        let input = readings(&[("Viscosity", "175"), ("Flash Point", "abc")]);

        let a = build_report("RME180", &input, limits, 1_756_500_000);
        let b = build_report("RME180", &input, limits, 1_756_500_000);

        assert_eq!(a, b);
    }
}
