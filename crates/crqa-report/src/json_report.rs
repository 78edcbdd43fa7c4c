//! JSON run report: per-check results with their issues.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crqa_model::{Issue, WorkbookKind};
use crqa_validate::ValidationRun;

use crate::csv_report::IssueRecord;
use crate::error::{ReportError, Result};
use crate::report_file_name;

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub label: String,
    pub kind: WorkbookKind,
    pub valid_format: bool,
    pub issue_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub tests: Vec<TestReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    /// Stable check identifier, e.g. `type-name-duplicate`.
    pub id: &'static str,
    pub description: &'static str,
    pub ran: bool,
    pub passed: bool,
    pub issues: Vec<IssueReport>,
}

/// A report line plus the offending literal, when the check recorded one.
#[derive(Debug, Clone, Serialize)]
pub struct IssueReport {
    #[serde(flatten)]
    pub record: IssueRecord,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&Issue> for IssueReport {
    fn from(issue: &Issue) -> Self {
        Self {
            record: IssueRecord::from(issue),
            value: issue.value.clone(),
        }
    }
}

impl From<&ValidationRun> for RunReport {
    fn from(run: &ValidationRun) -> Self {
        let tests = run
            .suite
            .tests
            .iter()
            .map(|test| TestReport {
                id: test.id.as_str(),
                description: test.id.description(),
                ran: test.ran,
                passed: test.passed(),
                issues: test.issues.iter().map(IssueReport::from).collect(),
            })
            .collect();

        Self {
            label: run.label.clone(),
            kind: run.kind,
            valid_format: run.valid_format,
            issue_count: run.suite.issue_count(),
            error_count: run.suite.error_count(),
            warning_count: run.suite.warning_count(),
            tests,
        }
    }
}

pub fn write_run_json<W: Write>(writer: W, run: &ValidationRun) -> Result<()> {
    serde_json::to_writer_pretty(writer, &RunReport::from(run))?;
    Ok(())
}

/// Write `<label>-QA.json` into `dir` and return its path.
pub fn write_json_report(dir: &Path, run: &ValidationRun) -> Result<PathBuf> {
    let path = dir.join(report_file_name(&run.label, "json"));
    let file = File::create(&path).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_run_json(&mut writer, run)?;
    writer.flush().map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote JSON report");
    Ok(path)
}
