//! Compliance classifier: one coerced value against one parsed limit.

use shared_types::{LimitExpression, VerdictKind};

/// Classifies a coerced value against its resolved limit.
///
/// `limit` is `None` when the parameter has no entry in the resolved
/// reference row. `value` is `None` when coercion found no numeral.
/// Missing reference wins over an uncoercible value: there is nothing to
/// check the value against either way, and the reviewer triages the two
/// cases differently. All bounds are inclusive. Total over all variants.
pub fn classify(value: Option<f64>, limit: Option<&LimitExpression>) -> VerdictKind {
    let Some(limit) = limit else {
        return VerdictKind::NoReference;
    };
    let Some(v) = value else {
        return VerdictKind::Unverifiable;
    };

    match *limit {
        LimitExpression::Unbounded => VerdictKind::NoLimit,
        LimitExpression::Range { min, max } => {
            if min <= v && v <= max {
                VerdictKind::WithinSpec
            } else {
                VerdictKind::OffSpec
            }
        }
        LimitExpression::UpperBound { max } => {
            if v <= max {
                VerdictKind::WithinSpec
            } else {
                VerdictKind::OffSpec
            }
        }
        LimitExpression::LowerBound { min } => {
            if v >= min {
                VerdictKind::WithinSpec
            } else {
                VerdictKind::OffSpec
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RANGE: LimitExpression = LimitExpression::Range { min: 2.0, max: 5.0 };
    const UPPER: LimitExpression = LimitExpression::UpperBound { max: 0.1 };
    const LOWER: LimitExpression = LimitExpression::LowerBound { min: 60.0 };

    #[test]
    fn test_missing_limit_wins_over_missing_value() {
        assert_eq!(classify(None, None), VerdictKind::NoReference);
        assert_eq!(classify(Some(4.5), None), VerdictKind::NoReference);
    }

    #[test]
    fn test_uncoercible_value() {
        assert_eq!(classify(None, Some(&RANGE)), VerdictKind::Unverifiable);
        assert_eq!(
            classify(None, Some(&LimitExpression::Unbounded)),
            VerdictKind::Unverifiable
        );
    }

    #[test]
    fn test_unbounded_never_fails() {
        assert_eq!(
            classify(Some(1e9), Some(&LimitExpression::Unbounded)),
            VerdictKind::NoLimit
        );
        assert_eq!(
            classify(Some(-1e9), Some(&LimitExpression::Unbounded)),
            VerdictKind::NoLimit
        );
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert_eq!(classify(Some(2.0), Some(&RANGE)), VerdictKind::WithinSpec);
        assert_eq!(classify(Some(5.0), Some(&RANGE)), VerdictKind::WithinSpec);
        assert_eq!(classify(Some(4.5), Some(&RANGE)), VerdictKind::WithinSpec);
        assert_eq!(classify(Some(1.999), Some(&RANGE)), VerdictKind::OffSpec);
        assert_eq!(classify(Some(5.001), Some(&RANGE)), VerdictKind::OffSpec);
    }

    #[test]
    fn test_upper_bound_inclusive() {
        assert_eq!(classify(Some(0.1), Some(&UPPER)), VerdictKind::WithinSpec);
        assert_eq!(classify(Some(0.15), Some(&UPPER)), VerdictKind::OffSpec);
    }

    #[test]
    fn test_lower_bound_inclusive() {
        assert_eq!(classify(Some(60.0), Some(&LOWER)), VerdictKind::WithinSpec);
        assert_eq!(classify(Some(59.9), Some(&LOWER)), VerdictKind::OffSpec);
    }
}
