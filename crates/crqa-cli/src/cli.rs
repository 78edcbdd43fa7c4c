//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crqa_model::WorkbookKind;

#[derive(Parser)]
#[command(
    name = "crqa",
    version,
    about = "Quality checks for change-request and mapping spreadsheets",
    long_about = "Check change-request and mapping spreadsheets before they are accepted.\n\n\
                  A workbook is read from a directory holding one CSV file per tab,\n\
                  named after the tab (for example `Type.csv`, `Facet.csv`)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a workbook directory and write the issue report.
    Validate(ValidateArgs),

    /// List the tabs and columns each workbook kind expects.
    Tabs(TabsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Directory holding one `<tab name>.csv` file per tab.
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Kind of workbook.
    #[arg(long = "kind", value_enum, default_value = "change-request")]
    pub kind: KindArg,

    /// Run label used in report file names (default: cr-qa).
    #[arg(long = "label")]
    pub label: Option<String>,

    /// Directory for report files (default: <DIR>).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format to write.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ReportFormatArg,

    /// Validate and print the summary without writing report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct TabsArgs {
    /// Only list this kind of workbook.
    #[arg(long = "kind", value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    ChangeRequest,
    Mapping,
}

impl From<KindArg> for WorkbookKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::ChangeRequest => WorkbookKind::ChangeRequest,
            KindArg::Mapping => WorkbookKind::Mapping,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
