//! Issue reports for spreadsheet QA runs.
//!
//! - **CSV**: one line per issue with the header
//!   `Tab,Row,Col,Label,Category,Description`
//! - **JSON**: the run summary with every check, run or not, and its issues
//!
//! Files are named `<label>-QA.csv` and `<label>-QA.json`.

mod csv_report;
mod error;
mod json_report;

pub use csv_report::{IssueRecord, issues_to_csv_string, write_csv_report, write_issues_csv};
pub use error::{ReportError, Result};
pub use json_report::{IssueReport, RunReport, TestReport, write_json_report, write_run_json};

/// File name of a report for a run label.
pub fn report_file_name(label: &str, extension: &str) -> String {
    format!("{label}-QA.{extension}")
}
