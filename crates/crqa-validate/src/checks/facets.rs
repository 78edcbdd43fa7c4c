//! Facet tab rules for added facets.

use crqa_model::{Category, Issue};

use super::Snapshot;
use crate::records::facet_columns;

/// The owning type of an added facet must be a simple type added in this
/// workbook. Blank owners are left to the required-field check.
pub fn type_undefined(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = facet_columns(snapshot.kind()).owner.column();
    snapshot
        .added_facets()
        .filter(|record| {
            !record.type_qname.is_empty() && !snapshot.index.is_simple_type(&record.type_qname)
        })
        .map(|record| {
            Issue::at_row(
                snapshot.facet_tab(),
                record.line,
                Some(col),
                &record.label,
                Category::InvalidReference,
                format!(
                    "Type '{}' must be a simple type added in this workbook.",
                    record.type_qname
                ),
            )
            .with_value(&record.type_qname)
        })
        .collect()
}

pub fn definition_required(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = facet_columns(snapshot.kind()).definition;
    snapshot
        .added_facets()
        .filter(|record| record.is_enumeration() && record.definition.is_empty())
        .map(|record| {
            Issue::at_row(
                snapshot.facet_tab(),
                record.line,
                Some(col),
                &record.label,
                Category::RequiredField,
                "A definition is required for each enumeration.",
            )
        })
        .collect()
}
