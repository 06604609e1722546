//! Reference lookup: the merged ISO 8217:2010 limit tables.
//!
//! Built once at process start from the embedded distillate and residual
//! tables and immutable afterward. Evaluations only ever read from it, so
//! it can be shared across workers without locking.

pub mod distillate;
pub mod residual;

use std::collections::HashMap;

use crate::error::EngineError;
use crate::limit::parse_limit;
use shared_types::LimitExpression;

/// One row of a source reference table, as it appears in the standard.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRow {
    pub grade: &'static str,
    pub parameter: &'static str,
    pub limit: &'static str,
}

/// One limit cell: the raw table text plus its parsed constraint.
///
/// `parsed` is `None` when the cell text was malformed; the raw text is
/// kept so the report can still show what the table said.
#[derive(Debug, Clone)]
pub struct LimitCell {
    pub raw: &'static str,
    pub parsed: Option<LimitExpression>,
}

/// The limits applicable to one fuel grade, in table order.
#[derive(Debug, Clone, Default)]
pub struct GradeLimits {
    entries: Vec<(&'static str, LimitCell)>,
}

impl GradeLimits {
    /// Looks up the limit cell for a parameter name. Exact match after
    /// trimming; parameter names are not normalized the way grades are.
    pub fn get(&self, parameter: &str) -> Option<&LimitCell> {
        let wanted = parameter.trim();
        self.entries
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, cell)| cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &LimitCell)> {
        self.entries.iter().map(|(name, cell)| (*name, cell))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merged reference table keyed by normalized grade.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    grades: HashMap<String, GradeLimits>,
}

/// Case-folds and trims a grade identifier for lookup.
pub fn normalize_grade(grade: &str) -> String {
    grade.trim().to_uppercase()
}

impl ReferenceTable {
    /// Builds the merged table from the embedded ISO 8217:2010 data.
    pub fn load() -> Result<Self, EngineError> {
        Self::from_rows(distillate::ROWS, residual::ROWS)
    }

    /// Merges two source tables into one grade-keyed namespace.
    ///
    /// A grade present in both tables is a data-integrity error: the
    /// distillate and residual sheets partition the grade space, and an
    /// overlap means one of them is wrong. Within a table, a duplicate
    /// (grade, parameter) pair keeps the first limit seen and is logged.
    pub fn from_rows(
        distillate_rows: &[ReferenceRow],
        residual_rows: &[ReferenceRow],
    ) -> Result<Self, EngineError> {
        let mut grades: HashMap<String, GradeLimits> = HashMap::new();
        let mut distillate_grades: Vec<String> = Vec::new();

        for row in distillate_rows {
            let key = normalize_grade(row.grade);
            if !distillate_grades.contains(&key) {
                distillate_grades.push(key.clone());
            }
            Self::insert_row(&mut grades, key, row);
        }

        for row in residual_rows {
            let key = normalize_grade(row.grade);
            if distillate_grades.contains(&key) {
                return Err(EngineError::DuplicateGrade(key));
            }
            Self::insert_row(&mut grades, key, row);
        }

        Ok(Self { grades })
    }

    fn insert_row(grades: &mut HashMap<String, GradeLimits>, key: String, row: &ReferenceRow) {
        let limits = grades.entry(key).or_default();

        if limits.get(row.parameter).is_some() {
            tracing::warn!(
                grade = row.grade,
                parameter = row.parameter,
                "duplicate reference row, keeping first limit seen"
            );
            return;
        }

        let parsed = match parse_limit(row.limit) {
            Ok(limit) => Some(limit),
            Err(e) => {
                tracing::warn!(
                    grade = row.grade,
                    parameter = row.parameter,
                    limit = row.limit,
                    error = %e,
                    "malformed limit cell in reference data"
                );
                None
            }
        };

        limits.entries.push((
            row.parameter,
            LimitCell {
                raw: row.limit,
                parsed,
            },
        ));
    }

    /// Resolves the limit row for a declared grade.
    pub fn resolve(&self, grade: &str) -> Result<&GradeLimits, EngineError> {
        let key = normalize_grade(grade);
        self.grades
            .get(&key)
            .ok_or_else(|| EngineError::UnknownGrade(grade.trim().to_string()))
    }

    /// All known grades, sorted.
    pub fn grades(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.grades.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
