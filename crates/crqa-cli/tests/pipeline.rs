//! Directory-to-report pipeline.

use std::path::Path;

use crqa_cli::pipeline::{ReportFormat, validate_directory, write_reports};
use crqa_model::{CheckId, Col, TabId, TabSchema, WorkbookKind};
use crqa_standards::CHANGE_REQUEST;

fn write_sheet(dir: &Path, tab: &TabSchema, rows: &[&[&str]]) {
    let path = dir.join(format!("{}.csv", tab.name));
    let mut writer = csv::Writer::from_path(&path).expect("create sheet");
    writer.write_record(tab.headers()).expect("write header");
    for row in rows {
        writer.write_record(*row).expect("write row");
    }
    writer.flush().expect("flush sheet");
}

/// A change request adding one simple type whose name lacks the suffix.
fn write_change_request(dir: &Path) {
    let type_tab = CHANGE_REQUEST.tab(TabId::Type).expect("type tab");
    let facet_tab = CHANGE_REQUEST.tab(TabId::Facet).expect("facet tab");
    let row: Vec<&str> = type_tab
        .columns
        .iter()
        .map(|(col, _)| match col {
            Col::Code => "add",
            Col::NewNs => "ext",
            Col::NewName => "Widget",
            Col::NewDefinition => "A data type for a widget.",
            Col::NewBase => "xs:token",
            Col::ContentStyle => "S",
            _ => "",
        })
        .collect();
    write_sheet(dir, type_tab, &[row.as_slice()]);
    write_sheet(dir, facet_tab, &[]);
}

#[test]
fn validates_a_directory_and_writes_both_reports() {
    let input = tempfile::tempdir().expect("tempdir");
    write_change_request(input.path());

    let run = validate_directory(input.path(), WorkbookKind::ChangeRequest, Some("widgets"))
        .expect("validate");
    assert!(run.valid_format);
    assert!(run.has_errors());
    let suffix = run
        .suite
        .get(CheckId::TypeNameSimpleSuffix)
        .expect("suffix check");
    assert_eq!(suffix.issues.len(), 1);
    assert_eq!(suffix.issues[0].row, Some(2));

    let output = tempfile::tempdir().expect("tempdir");
    let out_dir = output.path().join("reports");
    let written = write_reports(&run, &out_dir, ReportFormat::Both).expect("write reports");
    let names: Vec<_> = written
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .collect();
    assert_eq!(names, ["widgets-QA.csv", "widgets-QA.json"]);
    assert!(written.iter().all(|path| path.is_file()));
}

#[test]
fn missing_sheets_are_reported_not_raised() {
    let input = tempfile::tempdir().expect("tempdir");

    let run = validate_directory(input.path(), WorkbookKind::ChangeRequest, None)
        .expect("validate");
    assert!(!run.valid_format);
    assert_eq!(run.label, "cr-qa");
    let missing = run.suite.get(CheckId::TabMissing).expect("tab check");
    assert_eq!(missing.issues.len(), 2);
    assert!(run.index.is_none());
}

#[test]
fn missing_directory_is_an_error() {
    let input = tempfile::tempdir().expect("tempdir");
    let absent = input.path().join("nope");

    let error = validate_directory(&absent, WorkbookKind::Mapping, None).expect_err("no dir");
    assert!(format!("{error:#}").contains("nope"), "{error:#}");
}
