//! Compliance report PDF rendering.
//!
//! Produces a plain letter-size report: descriptive header, then a
//! Parameter / Value / Limit / Status table in extraction order. Layout is
//! deliberately minimal; styling is not a goal of this system.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};
use shared_types::{BunkerRecord, ComplianceReport, LimitExpression, OverallResult, VerdictKind};

use crate::error::PdfError;

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_LEFT: i64 = 50;
const TOP_Y: i64 = 750;
const BOTTOM_Y: i64 = 60;
const ROW_STEP: i64 = 14;

// Table column x positions.
const COL_PARAM: i64 = MARGIN_LEFT;
const COL_VALUE: i64 = 270;
const COL_LIMIT: i64 = 370;
const COL_STATUS: i64 = 460;

/// Renders a compliance report to PDF bytes.
pub fn render_report(
    record: &BunkerRecord,
    report: &ComplianceReport,
) -> Result<Vec<u8>, PdfError> {
    let mut pages: Vec<Vec<Operation>> = Vec::new();
    let mut ops: Vec<Operation> = Vec::new();
    let mut y = TOP_Y;

    text(&mut ops, "F2", 14, 180, y, "Fuel Specs Compliance Report");
    y -= 2 * ROW_STEP;

    for (label, value) in [
        ("Vessel", record.vessel.as_str()),
        ("IMO", record.imo.as_str()),
        ("Port", record.port.as_str()),
        ("Date", record.date.as_str()),
        ("Grade", record.grade.as_str()),
    ] {
        text(&mut ops, "F1", 10, MARGIN_LEFT, y, &format!("{}: {}", label, value));
        y -= ROW_STEP;
    }
    y -= ROW_STEP;

    table_header(&mut ops, y);
    y -= ROW_STEP;

    for entry in &report.entries {
        if y < BOTTOM_Y {
            pages.push(std::mem::take(&mut ops));
            y = TOP_Y;
            table_header(&mut ops, y);
            y -= ROW_STEP;
        }
        let verdict = &entry.verdict;

        text(&mut ops, "F1", 9, COL_PARAM, y, &entry.parameter);
        text(&mut ops, "F1", 9, COL_VALUE, y, &verdict.raw_value);
        text(&mut ops, "F1", 9, COL_LIMIT, y, &fmt_limit(verdict.limit.as_ref()));
        text(
            &mut ops,
            "F1",
            9,
            COL_STATUS,
            y,
            &format!("{} {}", verdict.kind.symbol(), verdict.kind.label()),
        );
        y -= ROW_STEP;
    }

    if y < BOTTOM_Y + 2 * ROW_STEP {
        pages.push(std::mem::take(&mut ops));
        y = TOP_Y;
    }
    y -= ROW_STEP;
    let overall = match report.overall {
        OverallResult::Pass => "Overall result: PASS",
        OverallResult::Fail => "Overall result: FAIL (off-spec parameters found)",
    };
    text(&mut ops, "F2", 11, MARGIN_LEFT, y, overall);
    y -= ROW_STEP;

    let off_spec = report.count(VerdictKind::OffSpec);
    let manual = report.count(VerdictKind::Unverifiable) + report.count(VerdictKind::NoReference);
    text(
        &mut ops,
        "F1",
        9,
        MARGIN_LEFT,
        y,
        &format!(
            "{} parameters checked, {} off spec, {} need manual review",
            report.entries.len(),
            off_spec,
            manual
        ),
    );
    pages.push(ops);

    assemble(pages)
}

fn table_header(ops: &mut Vec<Operation>, y: i64) {
    text(ops, "F2", 10, COL_PARAM, y, "Parameter");
    text(ops, "F2", 10, COL_VALUE, y, "Value");
    text(ops, "F2", 10, COL_LIMIT, y, "Limit");
    text(ops, "F2", 10, COL_STATUS, y, "Status");
}

/// One positioned text run. Each run is its own BT/ET block so Td offsets
/// stay absolute from the page origin.
fn text(ops: &mut Vec<Operation>, font: &str, size: i64, x: i64, y: i64, s: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(size)],
    ));
    ops.push(Operation::new(
        "Td",
        vec![Object::Integer(x), Object::Integer(y)],
    ));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(
            pdf_text(s).into_bytes(),
            StringFormat::Literal,
        )],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Maps extracted text onto what the built-in Type1 fonts can show.
fn pdf_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '≤' => out.push_str("<="),
            '≥' => out.push_str(">="),
            '°' => out.push_str(" deg"),
            c if c.is_ascii() && !c.is_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn fmt_limit(limit: Option<&LimitExpression>) -> String {
    match limit {
        None | Some(LimitExpression::Unbounded) => "-".to_string(),
        Some(LimitExpression::Range { min, max }) => format!("{} - {}", min, max),
        Some(LimitExpression::UpperBound { max }) => format!("<= {}", max),
        Some(LimitExpression::LowerBound { min }) => format!(">= {}", min),
    }
}

/// Builds the document skeleton around the rendered page contents.
fn assemble(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, PdfError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let font_bold = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica-Bold".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![
            ("F1", Object::Reference(font_regular)),
            ("F2", Object::Reference(font_bold)),
        ])),
    )]));

    let mut page_ids = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| PdfError::RenderError(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(PAGE_WIDTH),
                    Object::Integer(PAGE_HEIGHT),
                ]),
            ),
            ("Resources", Object::Reference(resources_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let count = page_ids.len() as i64;
    let kids = Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect());
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(count)),
        ("Kids", kids),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PdfError::RenderError(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ParameterReading, ReportEntry, Verdict};

    fn sample() -> (BunkerRecord, ComplianceReport) {
        let record = BunkerRecord {
            vessel: "MV Northern Star".to_string(),
            imo: "9456789".to_string(),
            port: "Rotterdam".to_string(),
            date: "2026-08-01".to_string(),
            grade: "RME180".to_string(),
            parameters: vec![ParameterReading::new("Viscosity", "175.2 cSt")],
        };
        let report = ComplianceReport {
            grade: "RME180".to_string(),
            entries: vec![ReportEntry {
                parameter: "Viscosity".to_string(),
                verdict: Verdict {
                    kind: VerdictKind::WithinSpec,
                    raw_value: "175.2 cSt".to_string(),
                    value: Some(175.2),
                    limit: Some(LimitExpression::UpperBound { max: 180.0 }),
                },
            }],
            overall: OverallResult::Pass,
            checked_at: 0,
        };
        (record, report)
    }

    #[test]
    fn test_rendered_pdf_parses_back() {
        let (record, report) = sample();
        let bytes = render_report(&record, &report).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_long_report_paginates() {
        let (record, mut report) = sample();
        let entry = report.entries[0].clone();
        report.entries = (0..120)
            .map(|i| {
                let mut e = entry.clone();
                e.parameter = format!("Parameter {}", i);
                e
            })
            .collect();

        let bytes = render_report(&record, &report).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn test_pdf_text_replaces_operators() {
        assert_eq!(pdf_text("≤380.0"), "<=380.0");
        assert_eq!(pdf_text("≥60"), ">=60");
        assert_eq!(pdf_text("40°C"), "40 degC");
        assert_eq!(pdf_text("µg"), "?g");
    }

    #[test]
    fn test_fmt_limit() {
        assert_eq!(
            fmt_limit(Some(&LimitExpression::Range { min: 2.0, max: 6.0 })),
            "2 - 6"
        );
        assert_eq!(
            fmt_limit(Some(&LimitExpression::UpperBound { max: 380.0 })),
            "<= 380"
        );
        assert_eq!(fmt_limit(None), "-");
    }
}
