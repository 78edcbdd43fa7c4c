//! Rule catalog.
//!
//! Every check is a pure function over the [`Snapshot`]. Checks never see
//! each other's output, so the runner is free to execute them in any order.

mod codes;
mod domains;
mod facets;
mod qualified;
mod required;
mod types;

use crqa_model::{CheckId, Col, Issue, Row, TabId, TabSchema, Workbook, WorkbookKind};

use crate::index::CrossReferenceIndex;
use crate::records::{FacetRecord, TypeRecord, facet_records, type_label, type_records};

pub use qualified::is_qualified_name;
pub use required::{EitherRequired, RequiredFields, either_required, required_fields};

/// Everything a check may read. Built once per run, after the structural
/// gate, and shared read-only by every check.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub workbook: &'a Workbook,
    pub types: Vec<TypeRecord>,
    pub facets: Vec<FacetRecord>,
    pub index: CrossReferenceIndex,
}

impl<'a> Snapshot<'a> {
    /// Normalize records and build the index over a well-formed workbook.
    pub fn new(workbook: &'a Workbook) -> Self {
        let types = type_records(workbook);
        let facets = facet_records(workbook);
        let index = CrossReferenceIndex::build(&types, &facets);
        Self {
            workbook,
            types,
            facets,
            index,
        }
    }

    pub fn kind(&self) -> WorkbookKind {
        self.workbook.kind
    }

    pub fn type_tab(&self) -> &'static str {
        self.workbook.tab_name(TabId::Type)
    }

    pub fn facet_tab(&self) -> &'static str {
        self.workbook.tab_name(TabId::Facet)
    }

    /// Added Type rows.
    pub fn added_types(&self) -> impl Iterator<Item = &TypeRecord> {
        self.types.iter().filter(|record| record.is_add())
    }

    /// Added Facet rows.
    pub fn added_facets(&self) -> impl Iterator<Item = &FacetRecord> {
        self.facets.iter().filter(|record| record.is_add())
    }
}

const CHANGE_REQUEST_CATALOG: &[CheckId] = &[
    CheckId::TabMissing,
    CheckId::ColumnMissing,
    CheckId::CodeInvalid,
    CheckId::FieldsRequired,
    CheckId::FieldsName,
    CheckId::FieldsQName,
    CheckId::TypeStyleInvalid,
    CheckId::FacetKindInvalid,
    CheckId::TypeNameDuplicate,
    CheckId::TypeNameSimpleSuffix,
    CheckId::TypeNameComplexSuffix,
    CheckId::TypeNameCodeEnumeration,
    CheckId::TypeNameCodeBase,
    CheckId::TypeNameRepeatedTerm,
    CheckId::TypeDefinitionOpening,
    CheckId::TypeOldNameOnAdd,
    CheckId::TypeBaseRequired,
    CheckId::TypeBaseSimpleInvalid,
    CheckId::TypeBaseCscUndefined,
    CheckId::FacetTypeUndefined,
    CheckId::FacetDefinitionRequired,
];

const MAPPING_CATALOG: &[CheckId] = &[
    CheckId::TabMissing,
    CheckId::ColumnMissing,
    CheckId::CodeInvalid,
    CheckId::FieldsRequired,
    CheckId::FieldsName,
    CheckId::FieldsQName,
    CheckId::TypeStyleInvalid,
    CheckId::FacetKindInvalid,
];

/// Checks of a workbook kind, in report order. Structural checks come first.
pub fn catalog(kind: WorkbookKind) -> &'static [CheckId] {
    match kind {
        WorkbookKind::ChangeRequest => CHANGE_REQUEST_CATALOG,
        WorkbookKind::Mapping => MAPPING_CATALOG,
    }
}

/// Run one semantic check. Structural checks are answered by the row loader
/// and yield nothing here.
pub fn run_check(id: CheckId, snapshot: &Snapshot<'_>) -> Vec<Issue> {
    match id {
        CheckId::TabMissing | CheckId::ColumnMissing => Vec::new(),
        CheckId::CodeInvalid => codes::check(snapshot),
        CheckId::FieldsRequired => required::check(snapshot),
        CheckId::FieldsName => qualified::check_names(snapshot),
        CheckId::FieldsQName => qualified::check_qnames(snapshot),
        CheckId::TypeStyleInvalid => domains::check_styles(snapshot),
        CheckId::FacetKindInvalid => domains::check_facet_kinds(snapshot),
        CheckId::TypeNameDuplicate => types::duplicate_names(snapshot),
        CheckId::TypeNameSimpleSuffix => types::simple_suffix(snapshot),
        CheckId::TypeNameComplexSuffix => types::complex_suffix(snapshot),
        CheckId::TypeNameCodeEnumeration => types::code_enumeration(snapshot),
        CheckId::TypeNameCodeBase => types::code_base(snapshot),
        CheckId::TypeNameRepeatedTerm => types::repeated_term(snapshot),
        CheckId::TypeDefinitionOpening => types::definition_opening(snapshot),
        CheckId::TypeOldNameOnAdd => types::old_name_on_add(snapshot),
        CheckId::TypeBaseRequired => types::base_required(snapshot),
        CheckId::TypeBaseSimpleInvalid => types::base_simple_invalid(snapshot),
        CheckId::TypeBaseCscUndefined => types::base_csc_undefined(snapshot),
        CheckId::FacetTypeUndefined => facets::type_undefined(snapshot),
        CheckId::FacetDefinitionRequired => facets::definition_required(snapshot),
    }
}

/// Columns that name a row, in preference order.
const LABEL_COLUMNS: &[Col] = &[
    Col::NewTypeQName,
    Col::OldTypeQName,
    Col::TargetName,
    Col::SourceName,
    Col::TargetPropertyName,
    Col::SourcePropertyName,
    Col::TargetTerm,
    Col::SourceTerm,
    Col::TargetUnionName,
    Col::SourceUnionName,
    Col::TargetMetadataName,
    Col::SourceMetadataName,
    Col::TargetPrefix,
    Col::SourcePrefix,
];

/// Human-readable name of a row for report labels.
pub(crate) fn row_label(tab: &TabSchema, row: &Row) -> String {
    if tab.id == TabId::Type && tab.has_column(Col::NewName) {
        return type_label(
            row.get(Col::NewNs),
            row.get(Col::NewName),
            row.get(Col::OldQName),
        );
    }
    LABEL_COLUMNS
        .iter()
        .filter(|col| tab.has_column(**col))
        .map(|col| row.get(*col))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Header of a column on one line, for messages.
pub(crate) fn column_title(tab: &TabSchema, col: Col) -> String {
    tab.header(col)
        .map_or_else(|| col.to_string(), |header| header.replace("\r\n", " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crqa_standards::{CHANGE_REQUEST, MAPPING};
    use std::collections::BTreeMap;

    #[test]
    fn catalogs_start_with_structural_checks() {
        for kind in [WorkbookKind::ChangeRequest, WorkbookKind::Mapping] {
            let ids = catalog(kind);
            assert!(ids[0].is_structural());
            assert!(ids[1].is_structural());
            assert!(ids[2..].iter().all(|id| !id.is_structural()));
        }
    }

    #[test]
    fn mapping_catalog_is_a_prefix_of_change_request() {
        let mapping = catalog(WorkbookKind::Mapping);
        assert_eq!(&catalog(WorkbookKind::ChangeRequest)[..mapping.len()], mapping);
    }

    #[test]
    fn labels_prefer_target_names() {
        let tab = MAPPING.tab(TabId::Property).expect("property tab");
        let row = Row::new(
            3,
            BTreeMap::from([
                (Col::SourceName, "personName".to_string()),
                (Col::TargetName, "PersonName".to_string()),
            ]),
        );
        assert_eq!(row_label(tab, &row), "PersonName");
    }

    #[test]
    fn change_request_type_label_is_qualified() {
        let tab = CHANGE_REQUEST.tab(TabId::Type).expect("type tab");
        let row = Row::new(
            2,
            BTreeMap::from([
                (Col::NewNs, "ext".to_string()),
                (Col::NewName, "WidgetType".to_string()),
            ]),
        );
        assert_eq!(row_label(tab, &row), "ext:WidgetType");
        assert_eq!(
            column_title(tab, Col::ContentStyle),
            "Content Style (CCC, CSC, or S)"
        );
    }
}
