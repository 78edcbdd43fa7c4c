//! Directory in, reports out.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crqa_ingest::read_csv_workbook;
use crqa_model::{RawWorkbook, WorkbookKind};
use crqa_report::{write_csv_report, write_json_report};
use crqa_standards::workbook_schema;
use crqa_validate::{ValidationRun, validate_workbook};

/// Report files to write after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Both,
}

impl ReportFormat {
    fn writes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    fn writes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

/// Read the CSV sheets of a workbook directory.
pub fn read_workbook(dir: &Path, kind: WorkbookKind) -> Result<RawWorkbook> {
    let raw = read_csv_workbook(dir, workbook_schema(kind))
        .with_context(|| format!("read workbook {}", dir.display()))?;
    debug!(tabs = raw.sheets.len(), "workbook read");
    Ok(raw)
}

/// Read and validate a workbook directory.
///
/// Only I/O and CSV syntax problems are errors; everything wrong with the
/// workbook content is reported through the run's issues.
pub fn validate_directory(
    dir: &Path,
    kind: WorkbookKind,
    label: Option<&str>,
) -> Result<ValidationRun> {
    let raw = read_workbook(dir, kind)?;
    Ok(validate_workbook(&raw, kind, label))
}

/// Write the requested reports into `dir`, creating it when needed.
pub fn write_reports(
    run: &ValidationRun,
    dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let mut written = Vec::new();
    if format.writes_csv() {
        written.push(write_csv_report(dir, run).context("write CSV report")?);
    }
    if format.writes_json() {
        written.push(write_json_report(dir, run).context("write JSON report")?);
    }
    info!(count = written.len(), dir = %dir.display(), "reports written");
    Ok(written)
}
