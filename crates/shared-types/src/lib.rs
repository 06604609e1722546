pub mod types;

pub use types::{
    BunkerRecord, ComplianceReport, LimitExpression, OverallResult, ParameterReading,
    ReportEntry, Verdict, VerdictKind,
};
