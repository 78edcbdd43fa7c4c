//! Normalized Type and Facet records.
//!
//! The two workbook kinds keep type and facet data in differently named
//! columns. Rules read these records instead, with content-style and
//! facet-kind defaults already resolved.

use serde::Serialize;

use crqa_model::{Col, ContentStyle, FacetKind, Row, TabId, Workbook, WorkbookKind};
use crqa_standards::{resolve_content_style, resolve_facet_kind};

/// Where a qualified name is read from.
#[derive(Debug, Clone, Copy)]
pub enum NameSource {
    /// One column holding `prefix:name`.
    Qualified(Col),
    /// Separate prefix and local name columns. A blank local name reads as
    /// no name at all.
    Split { prefix: Col, name: Col },
}

impl NameSource {
    fn read(&self, row: &Row) -> String {
        match *self {
            NameSource::Qualified(col) => row.get(col).to_string(),
            NameSource::Split { prefix, name } if !row.is_blank(name) => {
                qualify(row.get(prefix), row.get(name))
            }
            NameSource::Split { .. } => String::new(),
        }
    }

    /// Column a finding about this name points at.
    pub fn column(&self) -> Col {
        match *self {
            NameSource::Qualified(col) => col,
            NameSource::Split { name, .. } => name,
        }
    }
}

/// Columns a kind of workbook uses for type rows.
#[derive(Debug, Clone, Copy)]
pub struct TypeColumns {
    pub namespace: Col,
    pub name: Col,
    pub definition: Col,
    pub base: Col,
    pub style: Col,
    pub old: NameSource,
}

/// Columns a kind of workbook uses for facet rows.
#[derive(Debug, Clone, Copy)]
pub struct FacetColumns {
    pub owner: NameSource,
    pub old_owner: NameSource,
    pub value: Col,
    pub definition: Col,
    pub kind: Col,
}

const CHANGE_REQUEST_TYPE: TypeColumns = TypeColumns {
    namespace: Col::NewNs,
    name: Col::NewName,
    definition: Col::NewDefinition,
    base: Col::NewBase,
    style: Col::ContentStyle,
    old: NameSource::Qualified(Col::OldQName),
};

const MAPPING_TYPE: TypeColumns = TypeColumns {
    namespace: Col::TargetPrefix,
    name: Col::TargetName,
    definition: Col::TargetDefinition,
    base: Col::TargetBase,
    style: Col::TargetStyle,
    old: NameSource::Split {
        prefix: Col::SourcePrefix,
        name: Col::SourceName,
    },
};

const CHANGE_REQUEST_FACET: FacetColumns = FacetColumns {
    owner: NameSource::Qualified(Col::NewTypeQName),
    old_owner: NameSource::Qualified(Col::OldTypeQName),
    value: Col::NewValue,
    definition: Col::NewDefinition,
    kind: Col::NewKind,
};

const MAPPING_FACET: FacetColumns = FacetColumns {
    owner: NameSource::Split {
        prefix: Col::TargetPrefix,
        name: Col::TargetName,
    },
    old_owner: NameSource::Split {
        prefix: Col::SourcePrefix,
        name: Col::SourceName,
    },
    value: Col::TargetValue,
    definition: Col::TargetDefinition,
    kind: Col::TargetKind,
};

pub fn type_columns(kind: WorkbookKind) -> &'static TypeColumns {
    match kind {
        WorkbookKind::ChangeRequest => &CHANGE_REQUEST_TYPE,
        WorkbookKind::Mapping => &MAPPING_TYPE,
    }
}

pub fn facet_columns(kind: WorkbookKind) -> &'static FacetColumns {
    match kind {
        WorkbookKind::ChangeRequest => &CHANGE_REQUEST_FACET,
        WorkbookKind::Mapping => &MAPPING_FACET,
    }
}

/// `prefix:local`, with no trimming or validation of either part.
pub fn qualify(prefix: &str, local: &str) -> String {
    format!("{prefix}:{local}")
}

/// Row label for a type: its new qualified name, or the old one when the
/// row names no new type.
pub fn type_label(namespace: &str, name: &str, old_qname: &str) -> String {
    if namespace.is_empty() && name.is_empty() {
        old_qname.to_string()
    } else {
        qualify(namespace, name)
    }
}

/// One Type row with defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRecord {
    pub line: usize,
    pub code: String,
    pub namespace: String,
    pub name: String,
    pub qname: String,
    pub old_qname: String,
    pub definition: String,
    pub base: String,
    pub style_raw: String,
    /// `None` when the style cell holds an unknown spelling.
    pub style: Option<ContentStyle>,
    pub label: String,
}

impl TypeRecord {
    pub fn from_row(kind: WorkbookKind, row: &Row) -> Self {
        let cols = type_columns(kind);
        let namespace = row.get(cols.namespace).to_string();
        let name = row.get(cols.name).to_string();
        let old_qname = cols.old.read(row);
        let style_raw = row.get(cols.style).to_string();

        Self {
            line: row.line,
            code: row.code().to_string(),
            qname: qualify(&namespace, &name),
            label: type_label(&namespace, &name, &old_qname),
            definition: row.get(cols.definition).to_string(),
            base: row.get(cols.base).to_string(),
            style: resolve_content_style(kind, &style_raw),
            namespace,
            name,
            old_qname,
            style_raw,
        }
    }

    pub fn is_add(&self) -> bool {
        self.code == "add"
    }

    pub fn style_is(&self, style: ContentStyle) -> bool {
        self.style == Some(style)
    }

    /// Simple-class style: `S` in a change request, `simple`, `list` or
    /// `union` in a mapping.
    pub fn is_simple(&self) -> bool {
        self.style.is_some_and(|style| style.is_simple())
    }
}

/// One Facet row with the default kind resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetRecord {
    pub line: usize,
    pub code: String,
    pub type_qname: String,
    pub old_type_qname: String,
    pub value: String,
    pub definition: String,
    pub kind_raw: String,
    /// `None` when the kind cell holds an unknown spelling.
    pub kind: Option<FacetKind>,
    pub label: String,
}

impl FacetRecord {
    pub fn from_row(kind: WorkbookKind, row: &Row) -> Self {
        let cols = facet_columns(kind);
        let type_qname = cols.owner.read(row);
        let old_type_qname = cols.old_owner.read(row);
        let value = row.get(cols.value).to_string();
        let kind_raw = row.get(cols.kind).to_string();
        let facet_kind = resolve_facet_kind(&kind_raw);

        let owner = if type_qname.is_empty() {
            &old_type_qname
        } else {
            &type_qname
        };
        let kind_label = facet_kind.map_or(kind_raw.as_str(), |kind| kind.as_str());
        let label = format!("{owner} - {kind_label}: {value}");

        Self {
            line: row.line,
            code: row.code().to_string(),
            definition: row.get(cols.definition).to_string(),
            kind: facet_kind,
            label,
            type_qname,
            old_type_qname,
            value,
            kind_raw,
        }
    }

    pub fn is_add(&self) -> bool {
        self.code == "add"
    }

    pub fn is_enumeration(&self) -> bool {
        self.kind == Some(FacetKind::Enumeration)
    }

    /// Owning type name as written, without the kind.
    pub fn owner(&self) -> &str {
        if self.type_qname.is_empty() {
            &self.old_type_qname
        } else {
            &self.type_qname
        }
    }
}

/// Normalize every Type row of a workbook.
pub fn type_records(workbook: &Workbook) -> Vec<TypeRecord> {
    workbook
        .rows(TabId::Type)
        .iter()
        .map(|row| TypeRecord::from_row(workbook.kind, row))
        .collect()
}

/// Normalize every Facet row of a workbook.
pub fn facet_records(workbook: &Workbook) -> Vec<FacetRecord> {
    workbook
        .rows(TabId::Facet)
        .iter()
        .map(|row| FacetRecord::from_row(workbook.kind, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn row(values: &[(Col, &str)]) -> Row {
        let values: BTreeMap<_, _> = values
            .iter()
            .map(|(col, value)| (*col, value.to_string()))
            .collect();
        Row::new(2, values)
    }

    #[test]
    fn change_request_type_defaults_to_ccc() {
        let record = TypeRecord::from_row(
            WorkbookKind::ChangeRequest,
            &row(&[
                (Col::Code, "add"),
                (Col::NewNs, "ext"),
                (Col::NewName, "WidgetType"),
            ]),
        );
        assert_eq!(record.qname, "ext:WidgetType");
        assert_eq!(record.label, "ext:WidgetType");
        assert_eq!(record.style, Some(ContentStyle::Ccc));
        assert!(record.is_add());
        assert!(!record.is_simple());
    }

    #[test]
    fn unknown_style_resolves_to_none() {
        let record = TypeRecord::from_row(
            WorkbookKind::ChangeRequest,
            &row(&[(Col::ContentStyle, "simple")]),
        );
        assert_eq!(record.style, None);
        assert_eq!(record.style_raw, "simple");
    }

    #[test]
    fn delete_row_is_labelled_by_old_name() {
        let record = TypeRecord::from_row(
            WorkbookKind::ChangeRequest,
            &row(&[(Col::Code, "delete"), (Col::OldQName, "nc:OldType")]),
        );
        assert_eq!(record.label, "nc:OldType");
        assert_eq!(record.qname, ":");
    }

    #[test]
    fn mapping_type_reads_target_side() {
        let record = TypeRecord::from_row(
            WorkbookKind::Mapping,
            &row(&[
                (Col::Code, "edit"),
                (Col::SourcePrefix, "nc"),
                (Col::SourceName, "PersonType"),
                (Col::TargetPrefix, "ext"),
                (Col::TargetName, "PersonType"),
                (Col::TargetStyle, "list"),
            ]),
        );
        assert_eq!(record.old_qname, "nc:PersonType");
        assert_eq!(record.qname, "ext:PersonType");
        assert_eq!(record.style, Some(ContentStyle::List));
        assert!(record.is_simple());
    }

    #[test]
    fn facet_label_and_default_kind() {
        let record = FacetRecord::from_row(
            WorkbookKind::ChangeRequest,
            &row(&[
                (Col::Code, "add"),
                (Col::NewTypeQName, "ext:WidgetCodeSimpleType"),
                (Col::NewValue, "A"),
            ]),
        );
        assert!(record.is_enumeration());
        assert_eq!(record.label, "ext:WidgetCodeSimpleType - enumeration: A");
    }

    #[test]
    fn mapping_facet_owner_is_qualified() {
        let record = FacetRecord::from_row(
            WorkbookKind::Mapping,
            &row(&[
                (Col::TargetPrefix, "ext"),
                (Col::TargetName, "ColorCodeSimpleType"),
                (Col::TargetValue, "red"),
                (Col::TargetKind, "pattern"),
            ]),
        );
        assert_eq!(record.type_qname, "ext:ColorCodeSimpleType");
        assert_eq!(record.kind, Some(FacetKind::Pattern));
        assert!(record.old_type_qname.is_empty());
    }
}
