//! Content-style and facet-kind domain checks.

use crqa_model::{Category, FacetKind, Issue};
use crqa_standards::{content_style_list, content_styles, default_content_style};

use super::Snapshot;
use crate::records::{facet_columns, type_columns};

pub fn check_styles(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let kind = snapshot.kind();
    let col = type_columns(kind).style;
    let default = default_content_style(kind);
    let default_label = content_styles(kind)
        .iter()
        .find(|(_, style)| *style == default)
        .map_or("", |(label, _)| *label);
    let description = format!(
        "Valid content styles are {}. A blank field is also valid and defaults to '{default_label}'.",
        content_style_list(kind)
    );

    snapshot
        .types
        .iter()
        .filter(|record| !record.style_raw.is_empty() && record.style.is_none())
        .map(|record| {
            Issue::at_row(
                snapshot.type_tab(),
                record.line,
                Some(col),
                &record.label,
                Category::InvalidValue,
                description.clone(),
            )
            .with_value(&record.style_raw)
        })
        .collect()
}

pub fn check_facet_kinds(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = facet_columns(snapshot.kind()).kind;
    let kinds = FacetKind::ALL
        .iter()
        .map(FacetKind::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let description = format!(
        "Only the following facet kinds are allowed: {kinds}. A blank field defaults to 'enumeration'."
    );

    snapshot
        .facets
        .iter()
        .filter(|record| !record.kind_raw.is_empty() && record.kind.is_none())
        .map(|record| {
            Issue::at_row(
                snapshot.facet_tab(),
                record.line,
                Some(col),
                format!("{} - {}", record.owner(), record.value),
                Category::InvalidValue,
                description.clone(),
            )
            .with_value(&record.kind_raw)
        })
        .collect()
}
