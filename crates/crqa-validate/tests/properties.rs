//! Property tests for the name format checks and run determinism.

mod common;

use common::{WorkbookBuilder, widget_code_facet, widget_code_type};
use crqa_model::{CheckId, Col, TabId, WorkbookKind};
use crqa_validate::{is_qualified_name, validate_workbook};
use proptest::prelude::*;

fn local_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,15}"
}

fn prefix() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Issues of one check for a change-request workbook with a single type row.
fn check_issue_count(id: CheckId, col: Col, value: &str) -> usize {
    let row = [(Col::Code, "comment"), (col, value)];
    let raw = WorkbookBuilder::change_request()
        .row(TabId::Type, &row)
        .build();
    let run = validate_workbook(&raw, WorkbookKind::ChangeRequest, None);
    run.suite.get(id).map_or(0, |test| test.issues.len())
}

proptest! {
    #[test]
    fn qualified_column_accepts_prefixed_names(prefix in prefix(), name in local_name()) {
        let value = format!("{prefix}:{name}");
        prop_assert!(is_qualified_name(&value));
        prop_assert_eq!(check_issue_count(CheckId::FieldsQName, Col::NewBase, &value), 0);
    }

    #[test]
    fn qualified_column_rejects_local_names(name in local_name()) {
        prop_assume!(name != "NONE");
        prop_assert_eq!(check_issue_count(CheckId::FieldsQName, Col::NewBase, &name), 1);
    }

    #[test]
    fn name_column_accepts_local_names(name in local_name()) {
        prop_assert_eq!(check_issue_count(CheckId::FieldsName, Col::NewName, &name), 0);
    }

    #[test]
    fn name_column_rejects_prefixed_names(prefix in prefix(), name in local_name()) {
        let value = format!("{prefix}:{name}");
        prop_assert_eq!(check_issue_count(CheckId::FieldsName, Col::NewName, &value), 1);
    }

    #[test]
    fn repeated_runs_are_identical(
        names in proptest::collection::vec(local_name(), 1..6),
        styles in proptest::collection::vec(prop::sample::select(vec!["", "S", "CSC", "CCC", "bad"]), 1..6),
    ) {
        let mut builder = WorkbookBuilder::change_request()
            .row(TabId::Type, &widget_code_type())
            .row(TabId::Facet, &widget_code_facet());
        for (name, style) in names.iter().zip(&styles) {
            builder = builder.row(
                TabId::Type,
                &[
                    (Col::Code, "add"),
                    (Col::NewNs, "ext"),
                    (Col::NewName, name.as_str()),
                    (Col::ContentStyle, *style),
                    (Col::NewBase, "ext:WidgetCodeSimpleType"),
                ],
            );
        }
        let raw = builder.build();

        let first = validate_workbook(&raw, WorkbookKind::ChangeRequest, None);
        let second = validate_workbook(&raw, WorkbookKind::ChangeRequest, None);
        prop_assert_eq!(first.suite, second.suite);
        prop_assert_eq!(first.index, second.index);
    }
}

#[test]
fn none_is_exempt_from_both_checks() {
    assert_eq!(check_issue_count(CheckId::FieldsQName, Col::NewBase, "NONE"), 0);
    assert_eq!(check_issue_count(CheckId::FieldsName, Col::NewName, "NONE"), 0);
}
