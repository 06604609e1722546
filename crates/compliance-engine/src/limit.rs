//! Limit grammar parser.
//!
//! Reference limits arrive as free-text cells ("2.000-6.000", "≤380.0",
//! "≥60", "-"), not a structured schema. The grammar is small and total:
//! every cell maps to a `LimitExpression` variant, and only a recognized
//! operator with an unparseable operand is an error.

use crate::error::EngineError;
use shared_types::LimitExpression;

const UPPER_OPS: &[&str] = &["≤", "<="];
const LOWER_OPS: &[&str] = &["≥", ">="];

/// Parses one reference-table limit cell.
///
/// Precedence: placeholder, range, upper bound, lower bound, then the
/// permissive fallback. A bare number or otherwise unrecognized non-empty
/// cell parses as `Unbounded` and is logged, so malformed reference data
/// surfaces in the logs instead of silently failing deliveries.
pub fn parse_limit(text: &str) -> Result<LimitExpression, EngineError> {
    let trimmed = text.trim();

    // Placeholder cells mean "no limit for this grade".
    if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(LimitExpression::Unbounded);
    }

    // A dash between two numeric tokens is a range separator. A leading
    // dash is the sign of a negative number, never a separator.
    if let Some((min, max)) = split_range(trimmed) {
        if min > max {
            return Err(EngineError::malformed(
                trimmed,
                format!("range minimum {} exceeds maximum {}", min, max),
            ));
        }
        return Ok(LimitExpression::Range { min, max });
    }

    if let Some(operand) = strip_operator(trimmed, UPPER_OPS) {
        let max = parse_operand(trimmed, operand)?;
        return Ok(LimitExpression::UpperBound { max });
    }

    if let Some(operand) = strip_operator(trimmed, LOWER_OPS) {
        let min = parse_operand(trimmed, operand)?;
        return Ok(LimitExpression::LowerBound { min });
    }

    // Permissive fallback: no operator recognized. A bare number carries
    // no comparison direction, so it cannot be checked against anything.
    if trimmed.parse::<f64>().is_ok() {
        tracing::warn!(limit = trimmed, "limit cell is a bare number with no operator, treating as unbounded");
    } else {
        tracing::warn!(limit = trimmed, "unrecognized limit cell, treating as unbounded");
    }
    Ok(LimitExpression::Unbounded)
}

/// Finds a dash that splits the text into two parseable numbers.
fn split_range(text: &str) -> Option<(f64, f64)> {
    for (idx, ch) in text.char_indices() {
        if ch != '-' || idx == 0 {
            continue;
        }
        let lhs = text[..idx].trim();
        let rhs = text[idx + 1..].trim();
        if let (Ok(min), Ok(max)) = (lhs.parse::<f64>(), rhs.parse::<f64>()) {
            return Some((min, max));
        }
    }
    None
}

/// Strips the first matching operator, returning the remaining operand text.
fn strip_operator<'a>(text: &'a str, ops: &[&str]) -> Option<&'a str> {
    for op in ops {
        if text.contains(op) {
            // The operand is whatever remains once the operator is removed;
            // reference cells only ever carry one operator.
            let (before, after) = text.split_once(*op).unwrap_or(("", text));
            return Some(if after.trim().is_empty() {
                before.trim()
            } else {
                after.trim()
            });
        }
    }
    None
}

fn parse_operand(cell: &str, operand: &str) -> Result<f64, EngineError> {
    operand
        .parse::<f64>()
        .map_err(|_| EngineError::malformed(cell, format!("operand '{}' is not a number", operand)))
}
