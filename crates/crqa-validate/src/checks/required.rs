//! Required-field check.
//!
//! Which columns must be filled depends on the tab and the change code. The
//! combinations are data: one descriptor per (tab, code group), evaluated by
//! one generic function.

use crqa_model::{Category, ChangeCode, Col, Issue, Row, TabId, WorkbookKind};

use super::{Snapshot, column_title, row_label};

/// Columns that must be non-blank on rows of `tab` whose code is one of
/// `codes`.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFields {
    pub tab: TabId,
    pub codes: &'static [ChangeCode],
    pub columns: &'static [Col],
}

/// At least one of two columns must be non-blank.
#[derive(Debug, Clone, Copy)]
pub struct EitherRequired {
    pub tab: TabId,
    pub codes: &'static [ChangeCode],
    pub columns: [Col; 2],
}

const ADD: &[ChangeCode] = &[ChangeCode::Add];
const EDIT_DELETE: &[ChangeCode] = &[ChangeCode::Edit, ChangeCode::Delete];
const EDIT_DELETE_CLEAR: &[ChangeCode] = &[ChangeCode::Edit, ChangeCode::Delete, ChangeCode::Clear];
const MAP_SUBSET: &[ChangeCode] = &[ChangeCode::Map, ChangeCode::Subset];
const ADD_MAP_SUBSET: &[ChangeCode] = &[ChangeCode::Add, ChangeCode::Map, ChangeCode::Subset];

const CHANGE_REQUEST_REQUIRED: &[RequiredFields] = &[
    RequiredFields {
        tab: TabId::Type,
        codes: ADD,
        columns: &[Col::NewNs, Col::NewName, Col::NewDefinition],
    },
    RequiredFields {
        tab: TabId::Facet,
        codes: ADD,
        columns: &[Col::NewTypeQName, Col::NewValue],
    },
];

const MAPPING_REQUIRED: &[RequiredFields] = &[
    // Property
    RequiredFields {
        tab: TabId::Property,
        codes: ADD,
        columns: &[Col::TargetPrefix, Col::TargetName, Col::TargetDefinition],
    },
    RequiredFields {
        tab: TabId::Property,
        codes: EDIT_DELETE,
        columns: &[Col::SourcePrefix, Col::SourceName],
    },
    RequiredFields {
        tab: TabId::Property,
        codes: MAP_SUBSET,
        columns: &[Col::TargetPrefix, Col::TargetName],
    },
    // Type
    RequiredFields {
        tab: TabId::Type,
        codes: ADD,
        columns: &[Col::TargetPrefix, Col::TargetName, Col::TargetDefinition],
    },
    RequiredFields {
        tab: TabId::Type,
        codes: EDIT_DELETE_CLEAR,
        columns: &[Col::SourcePrefix, Col::SourceName],
    },
    RequiredFields {
        tab: TabId::Type,
        codes: MAP_SUBSET,
        columns: &[Col::TargetPrefix, Col::TargetName],
    },
    // Type-Has-Property
    RequiredFields {
        tab: TabId::TypeContainsProperty,
        codes: ADD_MAP_SUBSET,
        columns: &[
            Col::TargetTypePrefix,
            Col::TargetTypeName,
            Col::TargetPropertyPrefix,
            Col::TargetPropertyName,
        ],
    },
    RequiredFields {
        tab: TabId::TypeContainsProperty,
        codes: EDIT_DELETE,
        columns: &[
            Col::SourceTypePrefix,
            Col::SourceTypeName,
            Col::SourcePropertyPrefix,
            Col::SourcePropertyName,
        ],
    },
    // Codes
    RequiredFields {
        tab: TabId::Facet,
        codes: ADD,
        columns: &[Col::TargetPrefix, Col::TargetName, Col::TargetValue],
    },
    RequiredFields {
        tab: TabId::Facet,
        codes: EDIT_DELETE,
        columns: &[Col::SourcePrefix, Col::SourceName, Col::SourceValue],
    },
    RequiredFields {
        tab: TabId::Facet,
        codes: MAP_SUBSET,
        columns: &[Col::TargetPrefix, Col::TargetName, Col::TargetValue],
    },
    // Namespace
    RequiredFields {
        tab: TabId::Namespace,
        codes: ADD,
        columns: &[
            Col::TargetPrefix,
            Col::TargetUri,
            Col::TargetFileName,
            Col::TargetDefinition,
        ],
    },
    RequiredFields {
        tab: TabId::Namespace,
        codes: EDIT_DELETE_CLEAR,
        columns: &[Col::SourcePrefix],
    },
    RequiredFields {
        tab: TabId::Namespace,
        codes: MAP_SUBSET,
        columns: &[Col::TargetPrefix, Col::TargetUri],
    },
    // Local Terminology
    RequiredFields {
        tab: TabId::LocalTerminology,
        codes: ADD_MAP_SUBSET,
        columns: &[Col::TargetPrefix, Col::TargetTerm],
    },
    RequiredFields {
        tab: TabId::LocalTerminology,
        codes: EDIT_DELETE,
        columns: &[Col::SourcePrefix, Col::SourceTerm],
    },
    // Metadata
    RequiredFields {
        tab: TabId::Metadata,
        codes: ADD_MAP_SUBSET,
        columns: &[
            Col::TargetMetadataPrefix,
            Col::TargetMetadataName,
            Col::TargetAppliesToPrefix,
            Col::TargetAppliesToName,
        ],
    },
    RequiredFields {
        tab: TabId::Metadata,
        codes: EDIT_DELETE,
        columns: &[
            Col::SourceMetadataPrefix,
            Col::SourceMetadataName,
            Col::SourceAppliesToPrefix,
            Col::SourceAppliesToName,
        ],
    },
];

const MAPPING_EITHER: &[EitherRequired] = &[EitherRequired {
    tab: TabId::LocalTerminology,
    codes: ADD,
    columns: [Col::TargetLiteral, Col::TargetDefinition],
}];

/// Required-field descriptors of a workbook kind.
pub fn required_fields(kind: WorkbookKind) -> &'static [RequiredFields] {
    match kind {
        WorkbookKind::ChangeRequest => CHANGE_REQUEST_REQUIRED,
        WorkbookKind::Mapping => MAPPING_REQUIRED,
    }
}

/// One-of-two descriptors of a workbook kind.
pub fn either_required(kind: WorkbookKind) -> &'static [EitherRequired] {
    match kind {
        WorkbookKind::ChangeRequest => &[],
        WorkbookKind::Mapping => MAPPING_EITHER,
    }
}

fn applies(codes: &[ChangeCode], row: &Row) -> bool {
    codes.iter().any(|code| code.as_str() == row.code())
}

pub fn check(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let kind = snapshot.kind();
    let mut issues = Vec::new();

    for descriptor in required_fields(kind) {
        let Some(tab) = snapshot.workbook.tab(descriptor.tab) else {
            continue;
        };
        for row in tab.rows.iter().filter(|row| applies(descriptor.codes, row)) {
            for col in descriptor.columns {
                if !row.is_blank(*col) {
                    continue;
                }
                issues.push(Issue::at_row(
                    tab.name(),
                    row.line,
                    Some(*col),
                    row_label(tab.schema, row),
                    Category::RequiredField,
                    format!(
                        "'{}' is required for '{}' rows.",
                        column_title(tab.schema, *col),
                        row.code()
                    ),
                ));
            }
        }
    }

    for descriptor in either_required(kind) {
        let Some(tab) = snapshot.workbook.tab(descriptor.tab) else {
            continue;
        };
        let [first, second] = descriptor.columns;
        for row in tab.rows.iter().filter(|row| applies(descriptor.codes, row)) {
            if !row.is_blank(first) || !row.is_blank(second) {
                continue;
            }
            issues.push(Issue::at_row(
                tab.name(),
                row.line,
                None,
                row_label(tab.schema, row),
                Category::RequiredField,
                format!(
                    "Either '{}' or '{}' is required for '{}' rows.",
                    column_title(tab.schema, first),
                    column_title(tab.schema, second),
                    row.code()
                ),
            ));
        }
    }

    issues
}
