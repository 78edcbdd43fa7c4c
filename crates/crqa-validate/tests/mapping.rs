//! End-to-end runs over mapping spreadsheets.

mod common;

use common::WorkbookBuilder;
use crqa_model::{Category, CheckId, Col, Issue, TabId};
use crqa_validate::{ValidationRun, validate_workbook};

fn run(builder: WorkbookBuilder) -> ValidationRun {
    let kind = builder.kind();
    validate_workbook(&builder.build(), kind, Some("mapping-qa"))
}

fn issues_of(run: &ValidationRun, id: CheckId) -> Vec<&Issue> {
    run.suite
        .get(id)
        .map(|test| test.issues.iter().collect())
        .unwrap_or_default()
}

fn mapped_type() -> Vec<(Col, &'static str)> {
    vec![
        (Col::Code, "map"),
        (Col::SourcePrefix, "src"),
        (Col::SourceName, "PersonType"),
        (Col::TargetPrefix, "nc"),
        (Col::TargetName, "PersonType"),
        (Col::TargetBase, "structures:ObjectType"),
    ]
}

#[test]
fn mapped_type_is_clean() {
    let run = run(WorkbookBuilder::mapping().row(TabId::Type, &mapped_type()));

    let issues: Vec<_> = run.issues().collect();
    assert!(issues.is_empty(), "{issues:#?}");
    assert!(run.valid_format);
    assert_eq!(run.suite.tests.len(), 8);
    assert!(run.suite.get(CheckId::TypeNameDuplicate).is_none());
}

#[test]
fn missing_info_tab_is_rejected() {
    let run = run(WorkbookBuilder::mapping().without_tab(TabId::Info));

    assert!(!run.valid_format);
    let missing = issues_of(&run, CheckId::TabMissing);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].tab, "Info");
}

#[test]
fn all_mapping_codes_are_accepted() {
    let mut builder = WorkbookBuilder::mapping();
    for code in ["no change", "no match", "documentation", "comment"] {
        builder = builder.row(TabId::Namespace, &[(Col::Code, code), (Col::SourcePrefix, "nc")]);
    }
    let run = run(builder.row(TabId::Namespace, &[(Col::Code, "bogus")]));

    let invalid = issues_of(&run, CheckId::CodeInvalid);
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].tab, "Namespace");
    assert_eq!(invalid[0].row, Some(6));
}

#[test]
fn type_has_property_edit_requires_source_names() {
    let row = [
        (Col::Code, "edit"),
        (Col::SourceTypePrefix, "nc"),
        (Col::SourceTypeName, "PersonType"),
        (Col::SourcePropertyPrefix, "nc"),
    ];
    let run = run(WorkbookBuilder::mapping().row(TabId::TypeContainsProperty, &row));

    let required = issues_of(&run, CheckId::FieldsRequired);
    assert_eq!(required.len(), 1, "{required:#?}");
    assert_eq!(required[0].tab, "Type-Has-Property");
    assert_eq!(required[0].column, Some(Col::SourcePropertyName));
    assert_eq!(
        required[0].description,
        "'Property Name 1' is required for 'edit' rows."
    );
}

#[test]
fn local_term_needs_literal_or_definition() {
    let bare = [
        (Col::Code, "add"),
        (Col::TargetPrefix, "ext"),
        (Col::TargetTerm, "NIEM"),
    ];
    let with_literal = [
        (Col::Code, "add"),
        (Col::TargetPrefix, "ext"),
        (Col::TargetTerm, "CBRN"),
        (Col::TargetLiteral, "Chemical, Biological, Radiological, Nuclear"),
    ];
    let run = run(WorkbookBuilder::mapping()
        .row(TabId::LocalTerminology, &bare)
        .row(TabId::LocalTerminology, &with_literal));

    let required = issues_of(&run, CheckId::FieldsRequired);
    assert_eq!(required.len(), 1, "{required:#?}");
    assert_eq!(required[0].tab, "Local Terminology");
    assert_eq!(required[0].row, Some(2));
    assert_eq!(required[0].column, None);
    assert_eq!(required[0].label, "NIEM");
}

#[test]
fn name_columns_reject_prefixes() {
    let property = [
        (Col::Code, "add"),
        (Col::TargetPrefix, "nc"),
        (Col::TargetName, "nc:PersonName"),
        (Col::TargetDefinition, "A name of a person."),
        (Col::TargetType, "PersonNameType"),
        (Col::TargetGroup, "NONE"),
    ];
    let run = run(WorkbookBuilder::mapping().row(TabId::Property, &property));

    let names = issues_of(&run, CheckId::FieldsName);
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].column, Some(Col::TargetName));
    assert_eq!(names[0].label, "nc:PersonName");
    assert_eq!(names[0].category, Category::InvalidFormat);

    let qnames = issues_of(&run, CheckId::FieldsQName);
    assert_eq!(qnames.len(), 1);
    assert_eq!(qnames[0].column, Some(Col::TargetType));
    assert_eq!(qnames[0].value.as_deref(), Some("PersonNameType"));
}

#[test]
fn mapping_styles_use_long_spellings() {
    let list = {
        let mut row = mapped_type();
        row.push((Col::TargetStyle, "list"));
        row
    };
    let short = {
        let mut row = mapped_type();
        row.push((Col::TargetStyle, "S"));
        row
    };
    let run = run(WorkbookBuilder::mapping()
        .row(TabId::Type, &list)
        .row(TabId::Type, &short));

    let styles = issues_of(&run, CheckId::TypeStyleInvalid);
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].row, Some(3));
    assert_eq!(styles[0].column, Some(Col::TargetStyle));
    assert!(styles[0].description.contains("'object'"));

    let index = run.index.expect("index");
    assert!(index.simple_types.is_empty(), "only add rows are indexed");
}

#[test]
fn facet_kind_is_checked_on_the_codes_tab() {
    let code = [
        (Col::Code, "add"),
        (Col::TargetPrefix, "ext"),
        (Col::TargetName, "ColorCodeSimpleType"),
        (Col::TargetValue, "red"),
        (Col::TargetKind, "Enumeration"),
    ];
    let run = run(WorkbookBuilder::mapping().row(TabId::Facet, &code));

    let kinds = issues_of(&run, CheckId::FacetKindInvalid);
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0].tab, "Codes");
    assert_eq!(kinds[0].label, "ext:ColorCodeSimpleType - red");
    assert_eq!(kinds[0].column, Some(Col::TargetKind));
}

#[test]
fn added_mapping_types_are_indexed() {
    let added = [
        (Col::Code, "add"),
        (Col::TargetPrefix, "ext"),
        (Col::TargetName, "ColorCodeSimpleType"),
        (Col::TargetDefinition, "A data type for colors."),
        (Col::TargetBase, "xs:token"),
        (Col::TargetStyle, "simple"),
    ];
    let run = run(WorkbookBuilder::mapping().row(TabId::Type, &added));

    assert!(run.issues().next().is_none());
    let index = run.index.expect("index");
    assert!(index.is_simple_type("ext:ColorCodeSimpleType"));
}
