use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crqa_model::{Issue, Severity, Test};

use crate::types::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    let run = &result.run;
    println!("Workbook: {} ({})", result.input_dir.display(), run.kind);
    println!("Label: {}", run.label);
    if !run.valid_format {
        println!("Format: invalid, semantic checks were skipped");
    }
    for path in &result.reports {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Description"),
        header_cell("Status"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for test in &run.suite.tests {
        let (errors, warnings) = test_counts(test);
        table.add_row(vec![
            Cell::new(test.id.as_str()),
            Cell::new(test.id.description()),
            status_cell(test),
            count_cell(errors, Severity::Error),
            count_cell(warnings, Severity::Warning),
        ]);
    }
    println!("{table}");

    let issues = run.suite.sorted_by_severity();
    if !issues.is_empty() {
        print_issues(&issues);
    }
    println!(
        "{} issue(s): {} error(s), {} warning(s)",
        run.suite.issue_count(),
        run.suite.error_count(),
        run.suite.warning_count()
    );
}

fn print_issues(issues: &[&Issue]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Tab"),
        header_cell("Row"),
        header_cell("Col"),
        header_cell("Label"),
        header_cell("Description"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity()),
            Cell::new(&issue.tab),
            issue.row.map_or_else(|| dim_cell("-"), Cell::new),
            issue
                .column
                .map_or_else(|| dim_cell("-"), |col| Cell::new(col.as_str())),
            if issue.label.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(&issue.label)
            },
            Cell::new(&issue.description),
        ]);
    }
    println!("{table}");
}

/// (errors including rejects, warnings)
fn test_counts(test: &Test) -> (usize, usize) {
    let warnings = test
        .issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Warning)
        .count();
    (test.issues.len() - warnings, warnings)
}

fn status_cell(test: &Test) -> Cell {
    if !test.ran {
        dim_cell("SKIP")
    } else if test.passed() {
        Cell::new("PASS").fg(Color::Green)
    } else {
        match test.issues.iter().map(Issue::severity).min() {
            Some(Severity::Reject) => Cell::new("REJECT")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Some(Severity::Warning) => Cell::new("WARN").fg(Color::Yellow),
            _ => Cell::new("FAIL").fg(Color::Red),
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(32)),
        ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
    ]);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(10)),
        ColumnConstraint::UpperBoundary(Width::Fixed(28)),
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Fixed(24)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Reject => Cell::new("REJECT")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, severity: Severity) -> Cell {
    if count == 0 {
        dim_cell("-")
    } else {
        Cell::new(count).fg(severity_color(severity))
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Reject | Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
