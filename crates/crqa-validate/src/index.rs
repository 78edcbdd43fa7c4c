//! Cross-reference index over the types and facets a workbook adds.

use std::collections::BTreeSet;

use serde::Serialize;

use crqa_model::StyleClass;

use crate::records::{FacetRecord, TypeRecord};

/// Sets of qualified names declared by `add` rows.
///
/// Built once per run after the structural gate passes and never modified.
/// Types whose content style is unknown belong to no style set and therefore
/// not to `all_types` either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossReferenceIndex {
    pub simple_types: BTreeSet<String>,
    pub csc_types: BTreeSet<String>,
    pub ccc_types: BTreeSet<String>,
    pub all_types: BTreeSet<String>,
    /// Owning types named by added facets.
    pub facet_types: BTreeSet<String>,
    /// Owning types named by added enumeration facets.
    pub enum_types: BTreeSet<String>,
}

impl CrossReferenceIndex {
    pub fn build(types: &[TypeRecord], facets: &[FacetRecord]) -> Self {
        let mut index = Self::default();

        for record in types.iter().filter(|record| record.is_add()) {
            let Some(style) = record.style else {
                continue;
            };
            let set = match style.class() {
                StyleClass::Simple => &mut index.simple_types,
                StyleClass::Csc => &mut index.csc_types,
                StyleClass::Ccc => &mut index.ccc_types,
            };
            set.insert(record.qname.clone());
            index.all_types.insert(record.qname.clone());
        }

        for record in facets.iter().filter(|record| record.is_add()) {
            index.facet_types.insert(record.type_qname.clone());
            if record.is_enumeration() {
                index.enum_types.insert(record.type_qname.clone());
            }
        }

        index
    }

    pub fn is_simple_type(&self, qname: &str) -> bool {
        self.simple_types.contains(qname)
    }

    pub fn has_enumeration(&self, qname: &str) -> bool {
        self.enum_types.contains(qname)
    }
}
