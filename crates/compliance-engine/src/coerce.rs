// Numeric coercion for extracted parameter values
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// First contiguous signed decimal numeral in a string.
    static ref NUMERIC: Regex = Regex::new(r"[-+]?[0-9]*\.?[0-9]+").unwrap();
}

/// Extracts a numeric magnitude from a raw extracted value.
///
/// Values arrive contaminated with units and symbols ("4.5 cSt",
/// "0.15 %m/m", "< 0.01"); the first signed decimal substring wins.
/// Returns `None` when no numeral is present. Absence of a number is an
/// expected outcome of heuristic extraction, never an error.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    NUMERIC
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(coerce_numeric("4.5"), Some(4.5));
        assert_eq!(coerce_numeric("60"), Some(60.0));
    }

    #[test]
    fn test_number_with_unit() {
        assert_eq!(coerce_numeric("4.5 cSt"), Some(4.5));
        assert_eq!(coerce_numeric("0.15 %m/m"), Some(0.15));
        assert_eq!(coerce_numeric("991.0 kg/m3"), Some(991.0));
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(coerce_numeric("-6"), Some(-6.0));
        assert_eq!(coerce_numeric("+0.5"), Some(0.5));
        assert_eq!(coerce_numeric("pour point -6 degC"), Some(-6.0));
    }

    #[test]
    fn test_leading_symbol() {
        assert_eq!(coerce_numeric("< 0.01"), Some(0.01));
        assert_eq!(coerce_numeric("approx. 380"), Some(380.0));
    }

    #[test]
    fn test_bare_decimal_point() {
        assert_eq!(coerce_numeric(".5"), Some(0.5));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(coerce_numeric("abc"), None);
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("n/a"), None);
        assert_eq!(coerce_numeric("---"), None);
    }
}
