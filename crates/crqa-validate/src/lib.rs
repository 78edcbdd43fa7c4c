//! Validation of change-request and mapping spreadsheets.
//!
//! A run has two phases:
//!
//! - **Structural**: the row loader reports required tabs and columns that
//!   are missing. Any such finding stops the run.
//! - **Semantic**: Type and Facet rows are normalized, a cross-reference
//!   index of the types and facets being added is built, and every check of
//!   the workbook kind's catalog runs over that read-only snapshot.
//!
//! # Example
//!
//! ```ignore
//! use crqa_model::WorkbookKind;
//! use crqa_validate::validate_workbook;
//!
//! let run = validate_workbook(&raw, WorkbookKind::ChangeRequest, None);
//! for issue in run.suite.issues() {
//!     println!("{}:{:?} {}", issue.tab, issue.row, issue.description);
//! }
//! ```

pub mod checks;
mod engine;
mod index;
mod records;

pub use checks::{Snapshot, catalog, is_qualified_name, run_check};
pub use engine::RuleEngine;
pub use index::CrossReferenceIndex;
pub use records::{FacetRecord, TypeRecord, facet_records, qualify, type_records};

use serde::Serialize;
use tracing::{info, info_span, warn};

use crqa_ingest::{LoadedWorkbook, load_workbook};
use crqa_model::{CheckId, Issue, RawWorkbook, TestSuite, WorkbookKind};
use crqa_standards::workbook_schema;

/// Label used when the caller gives none.
pub const DEFAULT_LABEL: &str = "cr-qa";

/// Outcome of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRun {
    pub label: String,
    pub kind: WorkbookKind,
    /// False when a required tab or column is missing.
    pub valid_format: bool,
    pub suite: TestSuite,
    /// Absent when the structural gate stopped the run.
    pub index: Option<CrossReferenceIndex>,
}

impl ValidationRun {
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.suite.issues()
    }

    pub fn has_errors(&self) -> bool {
        self.suite.has_errors()
    }
}

/// Validate a parsed workbook.
///
/// Never fails: every data problem becomes an [`Issue`] in the returned
/// suite. The same input always yields the same issues in the same order.
pub fn validate_workbook(
    raw: &RawWorkbook,
    kind: WorkbookKind,
    label: Option<&str>,
) -> ValidationRun {
    let label = label.unwrap_or(DEFAULT_LABEL).to_string();
    let span = info_span!("validate", kind = %kind, label = %label);
    let _guard = span.enter();

    let loaded = load_workbook(raw, workbook_schema(kind));
    validate_loaded(&loaded, label)
}

/// Validate a workbook that has already been through the row loader.
pub fn validate_loaded(loaded: &LoadedWorkbook, label: String) -> ValidationRun {
    let kind = loaded.workbook.kind;
    let engine = RuleEngine::new(kind);

    let mut suite = TestSuite::new(engine.checks());
    suite.record(CheckId::TabMissing, loaded.missing_tabs.clone());
    suite.record(CheckId::ColumnMissing, loaded.missing_columns.clone());

    if !loaded.is_well_formed() {
        warn!(
            missing_tabs = loaded.missing_tabs.len(),
            missing_columns = loaded.missing_columns.len(),
            "workbook format is invalid; semantic checks skipped"
        );
        return ValidationRun {
            label,
            kind,
            valid_format: false,
            suite,
            index: None,
        };
    }

    let snapshot = Snapshot::new(&loaded.workbook);
    for (id, issues) in engine.execute(&snapshot) {
        suite.record(id, issues);
    }

    info!(
        rows = loaded.workbook.row_count(),
        issues = suite.issue_count(),
        errors = suite.error_count(),
        warnings = suite.warning_count(),
        "validation complete"
    );

    ValidationRun {
        label,
        kind,
        valid_format: true,
        suite,
        index: Some(snapshot.index),
    }
}
