//! Type tab rules for added types.
//!
//! Only rows whose code is literally `add` are inspected; whether the code
//! itself is valid is a separate check.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crqa_model::{Category, Col, ContentStyle, Issue};
use crqa_standards::SIMPLE_BASES;

use super::Snapshot;
use crate::records::{TypeColumns, TypeRecord, type_columns};

const SIMPLE_SUFFIX: &str = "SimpleType";
const CODE_SIMPLE_SUFFIX: &str = "CodeSimpleType";
const CODE_SUFFIX: &str = "CodeType";
const DEFINITION_OPENING: &str = "A data type ";

static REPEATED_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Type.*Type").expect("valid repeated-term pattern"));

fn issue(
    snapshot: &Snapshot<'_>,
    record: &TypeRecord,
    col: Col,
    category: Category,
    description: String,
) -> Issue {
    Issue::at_row(
        snapshot.type_tab(),
        record.line,
        Some(col),
        &record.label,
        category,
        description,
    )
}

fn columns(snapshot: &Snapshot<'_>) -> &'static TypeColumns {
    type_columns(snapshot.kind())
}

/// Added types with a name. Blank names are left to the required-field
/// check.
fn named_additions<'s>(snapshot: &'s Snapshot<'_>) -> impl Iterator<Item = &'s TypeRecord> {
    snapshot
        .added_types()
        .filter(|record| !record.name.is_empty())
}

pub fn duplicate_names(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in named_additions(snapshot) {
        *counts.entry(record.qname.as_str()).or_default() += 1;
    }

    let col = columns(snapshot).name;
    named_additions(snapshot)
        .filter_map(|record| {
            let count = counts.get(record.qname.as_str()).copied().unwrap_or_default();
            (count > 1).then(|| {
                issue(
                    snapshot,
                    record,
                    col,
                    Category::DuplicateName,
                    format!(
                        "Type '{}' is added {count} times in this workbook.",
                        record.qname
                    ),
                )
                .with_value(&record.qname)
            })
        })
        .collect()
}

pub fn simple_suffix(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).name;
    snapshot
        .added_types()
        .filter(|record| record.is_simple() && !record.name.ends_with(SIMPLE_SUFFIX))
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::NamingConvention,
                format!("Simple type names must end with '{SIMPLE_SUFFIX}'."),
            )
            .with_value(&record.name)
        })
        .collect()
}

pub fn complex_suffix(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).name;
    snapshot
        .added_types()
        .filter(|record| !record.is_simple() && record.name.ends_with(SIMPLE_SUFFIX))
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::NamingConvention,
                format!("Only simple type names may end with '{SIMPLE_SUFFIX}'."),
            )
            .with_value(&record.name)
        })
        .collect()
}

pub fn code_enumeration(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).name;
    snapshot
        .added_types()
        .filter(|record| {
            record.name.ends_with(CODE_SIMPLE_SUFFIX) && !snapshot.index.has_enumeration(&record.qname)
        })
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::NamingConvention,
                format!(
                    "Types ending in '{CODE_SIMPLE_SUFFIX}' must have enumerations. \
                     Add codes for '{}' in the Facet tab or rename the type.",
                    record.qname
                ),
            )
            .with_value(&record.name)
        })
        .collect()
}

pub fn code_base(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).name;
    snapshot
        .added_types()
        .filter(|record| {
            record.name.ends_with(CODE_SUFFIX) && !record.base.ends_with(CODE_SIMPLE_SUFFIX)
        })
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::NamingConvention,
                format!(
                    "Types ending in '{CODE_SUFFIX}' must have a base type ending in \
                     '{CODE_SIMPLE_SUFFIX}'."
                ),
            )
            .with_value(&record.base)
        })
        .collect()
}

pub fn repeated_term(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).name;
    snapshot
        .added_types()
        .filter(|record| REPEATED_TYPE.is_match(&record.name))
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::Advisory,
                "'Type' should only appear as the final term of a type name.".to_string(),
            )
            .with_value(&record.name)
        })
        .collect()
}

pub fn definition_opening(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).definition;
    snapshot
        .added_types()
        .filter(|record| {
            !record.definition.is_empty() && !record.definition.starts_with(DEFINITION_OPENING)
        })
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::InvalidField,
                format!("Type definitions should begin with '{DEFINITION_OPENING}'."),
            )
        })
        .collect()
}

pub fn old_name_on_add(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).old.column();
    snapshot
        .added_types()
        .filter(|record| !record.old_qname.is_empty())
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::InvalidField,
                "A new type should not have an old qualified name.".to_string(),
            )
            .with_value(&record.old_qname)
        })
        .collect()
}

pub fn base_required(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).base;
    snapshot
        .added_types()
        .filter(|record| {
            (record.style_is(ContentStyle::Csc) || record.style_is(ContentStyle::Simple))
                && record.base.is_empty()
        })
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::RequiredField,
                format!(
                    "A base type is required for content style '{}'.",
                    record.style_raw
                ),
            )
        })
        .collect()
}

pub fn base_simple_invalid(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).base;
    let allowed = SIMPLE_BASES.join(", ");
    snapshot
        .added_types()
        .filter(|record| {
            record.style_is(ContentStyle::Simple)
                && !record.base.is_empty()
                && !SIMPLE_BASES.contains(&record.base.as_str())
        })
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::InvalidReference,
                format!("Simple types must have one of these base types: {allowed}."),
            )
            .with_value(&record.base)
        })
        .collect()
}

pub fn base_csc_undefined(snapshot: &Snapshot<'_>) -> Vec<Issue> {
    let col = columns(snapshot).base;
    snapshot
        .added_types()
        .filter(|record| {
            record.style_is(ContentStyle::Csc)
                && !record.base.is_empty()
                && !snapshot.index.is_simple_type(&record.base)
        })
        .map(|record| {
            issue(
                snapshot,
                record,
                col,
                Category::InvalidReference,
                format!(
                    "Base type '{}' must be a simple type added in this workbook.",
                    record.base
                ),
            )
            .with_value(&record.base)
        })
        .collect()
}
