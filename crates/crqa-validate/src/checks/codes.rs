//! Change-code domain check.

use crqa_model::{Category, Col, Issue};
use crqa_standards::{allowed_change_codes, parse_change_code};

use super::{Snapshot, row_label};

/// Every row of a tab with a code column must carry an allowed code. Blank
/// codes are invalid too.
pub fn check(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let kind = snapshot.kind();
    let allowed = allowed_change_codes(kind)
        .iter()
        .map(|code| format!("'{code}'"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut issues = Vec::new();
    for tab in snapshot.workbook.tabs.values() {
        if !tab.schema.has_column(Col::Code) {
            continue;
        }
        for row in &tab.rows {
            let code = row.code();
            if parse_change_code(kind, code).is_some() {
                continue;
            }
            issues.push(
                Issue::at_row(
                    tab.name(),
                    row.line,
                    Some(Col::Code),
                    row_label(tab.schema, row),
                    Category::InvalidChangeCode,
                    format!("'{code}' is not a valid change code. Allowed codes are {allowed}."),
                )
                .with_value(code),
            );
        }
    }
    issues
}
