//! Flat CSV issue report.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crqa_model::Issue;
use crqa_validate::ValidationRun;

use crate::error::{ReportError, Result};
use crate::report_file_name;

/// One report line. Field names are the CSV header.
///
/// The report has no value column, so an offending literal that the
/// description does not already quote is appended to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    #[serde(rename = "Tab")]
    pub tab: String,
    /// Spreadsheet line, blank for tab-level issues.
    #[serde(rename = "Row")]
    pub row: String,
    /// Logical column key, blank when the issue is not about one column.
    #[serde(rename = "Col")]
    pub col: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl From<&Issue> for IssueRecord {
    fn from(issue: &Issue) -> Self {
        Self {
            tab: issue.tab.clone(),
            row: issue.row.map(|row| row.to_string()).unwrap_or_default(),
            col: issue.column.map(|col| col.to_string()).unwrap_or_default(),
            label: issue.label.clone(),
            category: issue.category.label().to_string(),
            description: describe(issue),
        }
    }
}

fn describe(issue: &Issue) -> String {
    match &issue.value {
        Some(value) if !issue.description.contains(&format!("'{value}'")) => {
            format!("{} (found '{value}')", issue.description)
        }
        _ => issue.description.clone(),
    }
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Write issues as CSV, header first. An empty issue list still yields the
/// header line.
pub fn write_issues_csv<'a, W, I>(writer: W, issues: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Issue>,
{
    let mut writer = csv_writer(writer);
    let mut wrote_any = false;
    for issue in issues {
        writer.serialize(IssueRecord::from(issue))?;
        wrote_any = true;
    }
    if !wrote_any {
        writer.write_record(["Tab", "Row", "Col", "Label", "Category", "Description"])?;
    }
    writer.flush().map_err(ReportError::Flush)?;
    Ok(())
}

pub fn issues_to_csv_string<'a, I>(issues: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut buffer = Vec::new();
    write_issues_csv(&mut buffer, issues)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write `<label>-QA.csv` into `dir` and return its path.
pub fn write_csv_report(dir: &Path, run: &ValidationRun) -> Result<PathBuf> {
    let path = dir.join(report_file_name(&run.label, "csv"));
    let file = File::create(&path).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    write_issues_csv(file, run.issues())?;
    info!(path = %path.display(), issues = run.suite.issue_count(), "wrote CSV report");
    Ok(path)
}
