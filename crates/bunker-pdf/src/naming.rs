//! Output artifact naming.

use chrono::{DateTime, Utc};
use shared_types::BunkerRecord;

/// Builds the report filename: `{Vessel}_{IMO}_{Date}_{Grade}_{timestamp}.pdf`.
///
/// Field values come straight from document extraction, so anything that
/// would break a filesystem path is replaced before joining.
pub fn report_filename(record: &BunkerRecord, now: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}_{}_{}.pdf",
        sanitize(&record.vessel),
        sanitize(&record.imo),
        sanitize(&record.date),
        sanitize(&record.grade),
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Keeps alphanumerics, dashes, and dots; everything else becomes a dash.
fn sanitize(field: &str) -> String {
    let cleaned: String = field
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn record() -> BunkerRecord {
        BunkerRecord {
            vessel: "MV Northern Star".to_string(),
            imo: "9456789".to_string(),
            port: "Rotterdam".to_string(),
            date: "2026-08-01".to_string(),
            grade: "RME180".to_string(),
            parameters: vec![],
        }
    }

    #[test]
    fn test_filename_format() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 14, 5, 9).unwrap();
        assert_eq!(
            report_filename(&record(), now),
            "MV-Northern-Star_9456789_2026-08-01_RME180_20260830_140509.pdf"
        );
    }

    #[test]
    fn test_path_separators_are_stripped() {
        let mut rec = record();
        rec.vessel = "../evil/vessel".to_string();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let name = report_filename(&rec, now);
        assert!(!name.contains('/'));
        assert!(name.starts_with("..-evil-vessel_"));
    }

    #[test]
    fn test_empty_field_gets_placeholder() {
        let mut rec = record();
        rec.imo = "  ".to_string();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(report_filename(&rec, now).contains("_unknown_"));
    }
}
