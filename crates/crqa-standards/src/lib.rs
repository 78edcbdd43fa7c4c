#![deny(unsafe_code)]

//! Tab schema registry and value domains.
//!
//! All tables are `static` and never mutated; callers receive them through
//! [`workbook_schema`] and pass them on explicitly.

pub mod change_request;
pub mod domains;
pub mod mapping;

use crqa_model::{WorkbookKind, WorkbookSchema};

pub use change_request::CHANGE_REQUEST;
pub use domains::{
    DEFAULT_FACET_KIND, NONE_SENTINEL, SIMPLE_BASES, allowed_change_codes, content_style_list,
    content_styles, default_content_style, parse_change_code, resolve_content_style,
    resolve_facet_kind,
};
pub use mapping::MAPPING;

/// Schema for a kind of workbook.
pub fn workbook_schema(kind: WorkbookKind) -> &'static WorkbookSchema {
    match kind {
        WorkbookKind::ChangeRequest => &CHANGE_REQUEST,
        WorkbookKind::Mapping => &MAPPING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crqa_model::{Col, TabId};

    #[test]
    fn change_request_requires_type_and_facet_only() {
        let required: Vec<_> = CHANGE_REQUEST
            .tabs
            .iter()
            .filter(|tab| tab.required)
            .map(|tab| tab.id)
            .collect();
        assert_eq!(required, vec![TabId::Type, TabId::Facet]);
    }

    #[test]
    fn mapping_requires_every_tab() {
        assert!(MAPPING.tabs.iter().all(|tab| tab.required));
        assert_eq!(MAPPING.tab_name(TabId::Facet), "Codes");
        assert_eq!(MAPPING.tab_name(TabId::TypeContainsProperty), "Type-Has-Property");
    }

    #[test]
    fn headers_keep_line_breaks() {
        let facet = CHANGE_REQUEST.tab(TabId::Facet).expect("facet tab");
        assert_eq!(
            facet.header(Col::NewKind),
            Some("Kind of Facet\r\n(default=enumeration)")
        );
        let ty = MAPPING.tab(TabId::Type).expect("type tab");
        assert_eq!(ty.header(Col::TargetStyle), Some("Style 2\r\ndefault=object"));
    }

    #[test]
    fn every_data_tab_has_a_code_column() {
        for schema in [&CHANGE_REQUEST, &MAPPING] {
            for tab in schema.tabs.iter().filter(|tab| !tab.columns.is_empty()) {
                assert!(tab.has_column(Col::Code), "{} lacks a code column", tab.name);
            }
        }
    }

    #[test]
    fn columns_are_unique_within_a_tab() {
        for schema in [&CHANGE_REQUEST, &MAPPING] {
            for tab in schema.tabs {
                let keys: std::collections::BTreeSet<_> =
                    tab.columns.iter().map(|(col, _)| *col).collect();
                let headers: std::collections::BTreeSet<_> = tab.headers().collect();
                assert_eq!(keys.len(), tab.columns.len(), "{}", tab.name);
                assert_eq!(headers.len(), tab.columns.len(), "{}", tab.name);
            }
        }
    }

    #[test]
    fn schema_lookup_by_kind() {
        assert_eq!(workbook_schema(WorkbookKind::Mapping).kind, WorkbookKind::Mapping);
        assert_eq!(
            workbook_schema(WorkbookKind::ChangeRequest).kind,
            WorkbookKind::ChangeRequest
        );
    }
}
