//! CSV and JSON report output.

use crqa_model::{Category, Col, Issue, RawSheet, RawWorkbook, TabId, WorkbookKind};
use crqa_report::{issues_to_csv_string, write_csv_report, write_json_report};
use crqa_standards::CHANGE_REQUEST;
use crqa_validate::validate_workbook;

#[test]
fn csv_report_layout() {
    let issues = vec![
        Issue::tab_level(
            "Facet",
            Category::MissingTab,
            "Tab 'Facet' is missing from the spreadsheet.",
        ),
        Issue::tab_level(
            "Type",
            Category::MissingColumn,
            "Column 'Content Style\\r\\n(CCC, CSC, or S)' is required in the 'Type' tab.",
        )
        .with_column(Col::ContentStyle),
        Issue::at_row(
            "Type",
            2,
            Some(Col::NewName),
            "ext:Widget",
            Category::NamingConvention,
            "Simple type names must end with 'SimpleType'.",
        )
        .with_value("Widget"),
    ];

    let csv = issues_to_csv_string(&issues).expect("render csv");
    insta::assert_snapshot!(csv.trim_end(), @r#"
    Tab,Row,Col,Label,Category,Description
    Facet,,,,Missing tab,Tab 'Facet' is missing from the spreadsheet.
    Type,,ContentStyle,,Missing column,"Column 'Content Style\r\n(CCC, CSC, or S)' is required in the 'Type' tab."
    Type,2,NewName,ext:Widget,Naming convention,Simple type names must end with 'SimpleType'. (found 'Widget')
    "#);
}

#[test]
fn empty_report_keeps_header() {
    let csv = issues_to_csv_string(std::iter::empty()).expect("render csv");
    assert_eq!(csv, "Tab,Row,Col,Label,Category,Description\n");
}

#[test]
fn reports_are_named_after_the_label() {
    let type_tab = CHANGE_REQUEST.tab(TabId::Type).expect("type tab");
    let facet_tab = CHANGE_REQUEST.tab(TabId::Facet).expect("facet tab");
    let mut types = RawSheet::new(type_tab.headers());
    types.push([
        ("Change Code", "add"),
        ("New NS", "ext"),
        ("New Type Name", "Widget"),
        ("Definition", "A data type for a widget."),
        ("Qualified Parent / Base Type", "xs:token"),
        ("Content Style\r\n(CCC, CSC, or S)", "S"),
    ]);
    let mut raw = RawWorkbook::new();
    raw.insert("Type", types);
    raw.insert("Facet", RawSheet::new(facet_tab.headers()));

    let run = validate_workbook(&raw, WorkbookKind::ChangeRequest, Some("widgets"));
    let dir = tempfile::tempdir().expect("tempdir");

    let csv_path = write_csv_report(dir.path(), &run).expect("write csv");
    assert_eq!(csv_path.file_name().and_then(|n| n.to_str()), Some("widgets-QA.csv"));
    let csv = std::fs::read_to_string(&csv_path).expect("read csv");
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Naming convention"));

    let json_path = write_json_report(dir.path(), &run).expect("write json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).expect("read json"))
            .expect("parse json");
    assert_eq!(json["label"], "widgets");
    assert_eq!(json["kind"], "change-request");
    assert_eq!(json["valid_format"], true);
    assert_eq!(json["issue_count"], 1);
    let tests = json["tests"].as_array().expect("tests array");
    assert_eq!(tests.len(), 21);
    let suffix = tests
        .iter()
        .find(|test| test["id"] == "type-name-simple-suffix")
        .expect("suffix test");
    assert_eq!(suffix["passed"], false);
    assert_eq!(suffix["issues"][0]["Row"], "2");
    assert_eq!(suffix["issues"][0]["Value"], "Widget");
}

#[test]
fn offending_value_reaches_the_csv_description() {
    let style = Issue::at_row(
        "Type",
        2,
        Some(Col::ContentStyle),
        "ext:W",
        Category::InvalidValue,
        "Valid content styles are CCC, CSC, S.",
    )
    .with_value("simple");
    let code = Issue::at_row(
        "Type",
        3,
        Some(Col::Code),
        "ext:X",
        Category::InvalidChangeCode,
        "'ad' is not a valid change code.",
    )
    .with_value("ad");

    let csv = issues_to_csv_string([&style, &code]).expect("render csv");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[1],
        "Type,2,ContentStyle,ext:W,Invalid value,\"Valid content styles are CCC, CSC, S. (found 'simple')\""
    );
    assert_eq!(
        lines[2],
        "Type,3,Code,ext:X,Invalid change code,'ad' is not a valid change code."
    );
}
