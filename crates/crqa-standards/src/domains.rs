//! Allowed values for change codes, content styles and facet kinds.

use crqa_model::{ChangeCode, ContentStyle, FacetKind, WorkbookKind};

/// Base types a simple type may restrict.
pub const SIMPLE_BASES: &[&str] = &["xs:string", "xs:token"];

/// Placeholder authors use for "deliberately no value" in name columns.
pub const NONE_SENTINEL: &str = "NONE";

/// Kind assumed for a facet row with a blank kind.
pub const DEFAULT_FACET_KIND: FacetKind = FacetKind::Enumeration;

const CHANGE_REQUEST_CODES: &[ChangeCode] = &[
    ChangeCode::Add,
    ChangeCode::Edit,
    ChangeCode::Delete,
    ChangeCode::Comment,
    ChangeCode::Map,
    ChangeCode::Subset,
];

const CHANGE_REQUEST_STYLES: &[(&str, ContentStyle)] = &[
    ("CCC", ContentStyle::Ccc),
    ("CSC", ContentStyle::Csc),
    ("S", ContentStyle::Simple),
];

const MAPPING_STYLES: &[(&str, ContentStyle)] = &[
    ("object", ContentStyle::Object),
    ("adapter", ContentStyle::Adapter),
    ("association", ContentStyle::Association),
    ("augmentation", ContentStyle::Augmentation),
    ("metadata", ContentStyle::Metadata),
    ("CSC", ContentStyle::Csc),
    ("simple", ContentStyle::Simple),
    ("list", ContentStyle::List),
    ("union", ContentStyle::Union),
];

/// Change codes accepted on rows of this kind of workbook.
pub fn allowed_change_codes(kind: WorkbookKind) -> &'static [ChangeCode] {
    match kind {
        WorkbookKind::ChangeRequest => CHANGE_REQUEST_CODES,
        WorkbookKind::Mapping => &ChangeCode::ALL,
    }
}

/// Literal change code, if it is one of the allowed codes.
pub fn parse_change_code(kind: WorkbookKind, value: &str) -> Option<ChangeCode> {
    ChangeCode::parse(value).filter(|code| allowed_change_codes(kind).contains(code))
}

/// Content style spellings of this kind of workbook.
pub fn content_styles(kind: WorkbookKind) -> &'static [(&'static str, ContentStyle)] {
    match kind {
        WorkbookKind::ChangeRequest => CHANGE_REQUEST_STYLES,
        WorkbookKind::Mapping => MAPPING_STYLES,
    }
}

/// Style assumed for a type row with a blank style.
pub fn default_content_style(kind: WorkbookKind) -> ContentStyle {
    match kind {
        WorkbookKind::ChangeRequest => ContentStyle::Ccc,
        WorkbookKind::Mapping => ContentStyle::Object,
    }
}

/// Resolve a style cell: blank takes the default, unknown spellings are `None`.
pub fn resolve_content_style(kind: WorkbookKind, value: &str) -> Option<ContentStyle> {
    if value.is_empty() {
        return Some(default_content_style(kind));
    }
    content_styles(kind)
        .iter()
        .find(|(label, _)| *label == value)
        .map(|(_, style)| *style)
}

/// Resolve a facet kind cell: blank means enumeration.
pub fn resolve_facet_kind(value: &str) -> Option<FacetKind> {
    if value.is_empty() {
        return Some(DEFAULT_FACET_KIND);
    }
    FacetKind::parse(value)
}

/// Comma-separated list of style spellings, for messages.
pub fn content_style_list(kind: WorkbookKind) -> String {
    content_styles(kind)
        .iter()
        .map(|(label, _)| *label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_style_takes_profile_default() {
        assert_eq!(
            resolve_content_style(WorkbookKind::ChangeRequest, ""),
            Some(ContentStyle::Ccc)
        );
        assert_eq!(
            resolve_content_style(WorkbookKind::Mapping, ""),
            Some(ContentStyle::Object)
        );
    }

    #[test]
    fn style_spellings_are_profile_specific() {
        assert_eq!(
            resolve_content_style(WorkbookKind::ChangeRequest, "S"),
            Some(ContentStyle::Simple)
        );
        assert_eq!(resolve_content_style(WorkbookKind::ChangeRequest, "simple"), None);
        assert_eq!(
            resolve_content_style(WorkbookKind::Mapping, "simple"),
            Some(ContentStyle::Simple)
        );
        assert_eq!(resolve_content_style(WorkbookKind::Mapping, "S"), None);
    }

    #[test]
    fn blank_facet_kind_is_enumeration() {
        assert_eq!(resolve_facet_kind(""), Some(FacetKind::Enumeration));
        assert_eq!(resolve_facet_kind("pattern"), Some(FacetKind::Pattern));
        assert_eq!(resolve_facet_kind("enum"), None);
    }

    #[test]
    fn change_request_rejects_mapping_only_codes() {
        assert_eq!(
            parse_change_code(WorkbookKind::ChangeRequest, "map"),
            Some(ChangeCode::Map)
        );
        assert_eq!(parse_change_code(WorkbookKind::ChangeRequest, "clear"), None);
        assert_eq!(
            parse_change_code(WorkbookKind::Mapping, "no match"),
            Some(ChangeCode::NoMatch)
        );
    }

    #[test]
    fn style_list_for_messages() {
        assert_eq!(content_style_list(WorkbookKind::ChangeRequest), "CCC, CSC, S");
    }
}
