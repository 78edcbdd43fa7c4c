use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use crqa_cli::pipeline::{ReportFormat, validate_directory, write_reports};
use crqa_model::{WorkbookKind, WorkbookSchema};
use crqa_standards::workbook_schema;

use crate::cli::{ReportFormatArg, TabsArgs, ValidateArgs};
use crate::summary::apply_table_style;
use crate::types::ValidateResult;

pub fn run_tabs(args: &TabsArgs) -> Result<()> {
    let kinds = match args.kind {
        Some(kind) => vec![WorkbookKind::from(kind)],
        None => vec![WorkbookKind::ChangeRequest, WorkbookKind::Mapping],
    };
    for kind in kinds {
        println!("{kind}");
        println!("{}", tabs_table(workbook_schema(kind)));
    }
    Ok(())
}

fn tabs_table(schema: &WorkbookSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Tab", "Required", "Columns"]);
    apply_table_style(&mut table);
    for tab in schema.tabs {
        let columns = tab
            .headers()
            .map(|header| header.replace("\r\n", " "))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            tab.name.to_string(),
            if tab.required { "yes" } else { "no" }.to_string(),
            columns,
        ]);
    }
    table
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let kind = WorkbookKind::from(args.kind);
    let span = info_span!("workbook", dir = %args.input_dir.display(), kind = %kind);
    let _guard = span.enter();
    let started = Instant::now();

    let run = validate_directory(&args.input_dir, kind, args.label.as_deref())?;

    let reports = if args.dry_run {
        info!("dry run, no reports written");
        Vec::new()
    } else {
        let output_dir = args.output_dir.as_ref().unwrap_or(&args.input_dir);
        write_reports(&run, output_dir, report_format(args.format))?
    };

    info!(
        elapsed_ms = started.elapsed().as_millis(),
        issues = run.suite.issue_count(),
        "workbook checked"
    );
    Ok(ValidateResult {
        input_dir: args.input_dir.clone(),
        run,
        reports,
    })
}

fn report_format(format: ReportFormatArg) -> ReportFormat {
    match format {
        ReportFormatArg::Csv => ReportFormat::Csv,
        ReportFormatArg::Json => ReportFormat::Json,
        ReportFormatArg::Both => ReportFormat::Both,
    }
}
