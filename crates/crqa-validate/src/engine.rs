//! Rule engine: runs the catalog of a workbook kind over one snapshot.

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crqa_model::{CheckId, Issue, WorkbookKind};

use crate::checks::{Snapshot, catalog, run_check};

/// Executes the semantic checks of one workbook kind.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine {
    kind: WorkbookKind,
}

impl RuleEngine {
    pub fn new(kind: WorkbookKind) -> Self {
        Self { kind }
    }

    /// Every check of the catalog, structural ones included, in report order.
    pub fn checks(&self) -> &'static [CheckId] {
        catalog(self.kind)
    }

    /// Semantic checks only.
    pub fn semantic_checks(&self) -> impl Iterator<Item = CheckId> {
        self.checks().iter().copied().filter(|id| !id.is_structural())
    }

    /// Run every semantic check over the snapshot on the rayon pool.
    ///
    /// Results come back in catalog order regardless of which check finishes
    /// first.
    pub fn execute(&self, snapshot: &Snapshot<'_>) -> Vec<(CheckId, Vec<Issue>)> {
        let ids: Vec<CheckId> = self.semantic_checks().collect();
        ids.par_iter()
            .map(|id| {
                let issues = run_check(*id, snapshot);
                debug!(check = %id, issues = issues.len(), "check finished");
                (*id, issues)
            })
            .collect()
    }
}
