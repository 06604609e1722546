use serde::{Deserialize, Serialize};

/// Structured record extracted from a bunker delivery note.
///
/// Produced by the field-extraction collaborator (LLM or rule-based) and
/// treated as untrusted input: the grade is normalized before lookup and
/// every parameter value goes through numeric coercion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BunkerRecord {
    pub vessel: String,
    pub imo: String,
    pub port: String,
    pub date: String,
    pub grade: String,
    /// Parameter readings in extraction order. Order is preserved through
    /// the report for traceability against the source document.
    pub parameters: Vec<ParameterReading>,
}

/// One (parameter name, raw value) pair from upstream extraction.
///
/// The value is an untyped string that may contain units, symbols, or be
/// entirely non-numeric ("4.5 cSt", "< 0.01", "n/a").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterReading {
    pub name: String,
    pub value: String,
}

impl ParameterReading {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A parsed specification limit for one parameter under one fuel grade.
///
/// All bounds are inclusive, matching how the ISO 8217 tables read
/// ("max. 380.0" admits exactly 380.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LimitExpression {
    /// No constraint; any measured value passes.
    Unbounded,
    Range { min: f64, max: f64 },
    UpperBound { max: f64 },
    LowerBound { min: f64 },
}

/// Classification outcome for a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    WithinSpec,
    OffSpec,
    /// The reference row has no limit for this parameter; informational.
    NoLimit,
    /// Parameter absent from the resolved reference row.
    NoReference,
    /// The raw value could not be coerced to a number.
    Unverifiable,
}

impl VerdictKind {
    /// Human-readable status text used in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            VerdictKind::WithinSpec => "Within",
            VerdictKind::OffSpec => "Off Spec",
            VerdictKind::NoLimit => "No limit",
            VerdictKind::NoReference => "No reference found",
            VerdictKind::Unverifiable => "Check manually",
        }
    }

    /// Single-character marker for compact table output.
    pub fn symbol(&self) -> &'static str {
        match self {
            VerdictKind::WithinSpec | VerdictKind::NoLimit => "OK",
            VerdictKind::OffSpec => "X",
            VerdictKind::NoReference | VerdictKind::Unverifiable => "?",
        }
    }
}

/// Result of evaluating one parameter reading against its limit.
///
/// Carries the original raw value and the matched limit (if any) so a
/// reviewer can audit the classification without re-running extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub raw_value: String,
    /// Coerced numeric magnitude, when coercion succeeded.
    pub value: Option<f64>,
    /// The limit this value was checked against, when one was resolved.
    pub limit: Option<LimitExpression>,
}

/// Overall pass/fail judgment for one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallResult {
    Pass,
    Fail,
}

/// One row of the compliance report: a reading paired with its verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub parameter: String,
    pub verdict: Verdict,
}

/// Full compliance evaluation of one bunker delivery note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Normalized grade the reference row was resolved for.
    pub grade: String,
    /// Entries in extraction order.
    pub entries: Vec<ReportEntry>,
    pub overall: OverallResult,
    pub checked_at: u64,
}

impl ComplianceReport {
    /// Count of entries with the given verdict kind.
    pub fn count(&self, kind: VerdictKind) -> usize {
        self.entries
            .iter()
            .filter(|e| e.verdict.kind == kind)
            .count()
    }
}
