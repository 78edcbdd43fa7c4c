//! Local-name and qualified-name format checks.

use crqa_model::{Category, Col, Issue, TabId, WorkbookKind};
use crqa_standards::NONE_SENTINEL;

use super::Snapshot;

type Field = (TabId, Col);

const CHANGE_REQUEST_NAMES: &[Field] = &[(TabId::Type, Col::NewName)];

const CHANGE_REQUEST_QNAMES: &[Field] = &[
    (TabId::Type, Col::OldQName),
    (TabId::Type, Col::NewBase),
    (TabId::Facet, Col::OldTypeQName),
    (TabId::Facet, Col::NewTypeQName),
];

const MAPPING_NAMES: &[Field] = &[
    (TabId::Property, Col::SourceName),
    (TabId::Property, Col::TargetName),
    (TabId::Type, Col::SourceName),
    (TabId::Type, Col::TargetName),
    (TabId::TypeContainsProperty, Col::SourceTypeName),
    (TabId::TypeContainsProperty, Col::SourcePropertyName),
    (TabId::TypeContainsProperty, Col::TargetTypeName),
    (TabId::TypeContainsProperty, Col::TargetPropertyName),
    (TabId::Facet, Col::SourceName),
    (TabId::Facet, Col::TargetName),
    (TabId::Union, Col::SourceUnionName),
    (TabId::Union, Col::SourceMemberName),
    (TabId::Union, Col::TargetUnionName),
    (TabId::Union, Col::TargetMemberName),
    (TabId::Metadata, Col::SourceMetadataName),
    (TabId::Metadata, Col::SourceAppliesToName),
    (TabId::Metadata, Col::TargetMetadataName),
    (TabId::Metadata, Col::TargetAppliesToName),
];

const MAPPING_QNAMES: &[Field] = &[
    (TabId::Property, Col::TargetType),
    (TabId::Property, Col::TargetGroup),
    (TabId::Type, Col::TargetBase),
];

fn name_fields(kind: WorkbookKind) -> &'static [Field] {
    match kind {
        WorkbookKind::ChangeRequest => CHANGE_REQUEST_NAMES,
        WorkbookKind::Mapping => MAPPING_NAMES,
    }
}

fn qname_fields(kind: WorkbookKind) -> &'static [Field] {
    match kind {
        WorkbookKind::ChangeRequest => CHANGE_REQUEST_QNAMES,
        WorkbookKind::Mapping => MAPPING_QNAMES,
    }
}

/// A value counts as qualified when it contains a colon anywhere.
pub fn is_qualified_name(value: &str) -> bool {
    value.contains(':')
}

fn is_exempt(value: &str) -> bool {
    value.is_empty() || value == NONE_SENTINEL
}

/// Name columns must hold a local name.
pub fn check_names(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    check_fields(snapshot, name_fields(snapshot.kind()), false)
}

/// Qualified-name columns must hold `prefix:name`.
pub fn check_qnames(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    check_fields(snapshot, qname_fields(snapshot.kind()), true)
}

fn check_fields(snapshot: &Snapshot<'_>, fields: &[Field], qualified: bool) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (tab_id, col) in fields {
        let Some(tab) = snapshot.workbook.tab(*tab_id) else {
            continue;
        };
        for row in &tab.rows {
            let value = row.get(*col);
            if is_exempt(value) || is_qualified_name(value) == qualified {
                continue;
            }
            let description = if qualified {
                format!("'{value}' must be a qualified name with a namespace prefix.")
            } else {
                format!("'{value}' must be a name without a namespace prefix.")
            };
            issues.push(
                Issue::at_row(
                    tab.name(),
                    row.line,
                    Some(*col),
                    value,
                    Category::InvalidFormat,
                    description,
                )
                .with_value(value),
            );
        }
    }

    issues
}
