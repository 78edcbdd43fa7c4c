//! Row loader: applies a workbook schema to raw parser output.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crqa_model::{
    Category, Issue, RawRecord, RawSheet, RawWorkbook, Row, Tab, TabSchema, Workbook,
    WorkbookSchema,
};

/// Loaded tabs plus the structural findings made while loading them.
#[derive(Debug, Clone)]
pub struct LoadedWorkbook {
    pub workbook: Workbook,
    pub missing_tabs: Vec<Issue>,
    pub missing_columns: Vec<Issue>,
}

impl LoadedWorkbook {
    /// True when every required tab and every declared column was found.
    pub fn is_well_formed(&self) -> bool {
        self.missing_tabs.is_empty() && self.missing_columns.is_empty()
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.missing_tabs.iter().chain(self.missing_columns.iter())
    }
}

/// Load every tab the schema expects.
///
/// Never fails on cell content. A required tab with no sheet yields a
/// missing-tab issue; a declared header absent from the first row of a
/// non-empty sheet yields a missing-column issue. Deterministic: the same
/// input always produces the same rows and issues.
pub fn load_workbook(raw: &RawWorkbook, schema: &'static WorkbookSchema) -> LoadedWorkbook {
    let mut workbook = Workbook::new(schema.kind);
    let mut missing_tabs = Vec::new();
    let mut missing_columns = Vec::new();

    for tab_schema in schema.tabs {
        let mut tab = Tab::new(tab_schema);

        match raw.sheet(tab_schema.name) {
            Some(sheet) => {
                tab.present = true;
                tab.rows = sheet
                    .records
                    .iter()
                    .map(|record| load_row(tab_schema, record))
                    .collect();
                missing_columns.extend(check_columns(tab_schema, sheet));
                debug!(tab = tab_schema.name, rows = tab.rows.len(), "loaded tab");
            }
            None if tab_schema.required => {
                warn!(tab = tab_schema.name, "required tab is missing");
                missing_tabs.push(Issue::tab_level(
                    tab_schema.name,
                    Category::MissingTab,
                    format!("Tab '{}' is missing from the spreadsheet.", tab_schema.name),
                ));
            }
            None => {
                debug!(tab = tab_schema.name, "optional tab not present");
            }
        }

        workbook.tabs.insert(tab_schema.id, tab);
    }

    LoadedWorkbook {
        workbook,
        missing_tabs,
        missing_columns,
    }
}

/// Blank-fill every declared column of one record.
fn load_row(schema: &TabSchema, record: &RawRecord) -> Row {
    let values: BTreeMap<_, _> = schema
        .columns
        .iter()
        .map(|(col, header)| {
            let value = record.cells.get(*header).cloned().unwrap_or_default();
            (*col, value)
        })
        .collect();
    Row::new(record.line, values)
}

/// Headers are only checked when the sheet has data. The first row exposes
/// every sheet header (blank-filled) plus any cell it carries itself.
fn check_columns(schema: &TabSchema, sheet: &RawSheet) -> Vec<Issue> {
    let Some(first) = sheet.records.first() else {
        return Vec::new();
    };

    let keys: BTreeSet<&str> = sheet
        .headers
        .iter()
        .map(String::as_str)
        .chain(first.cells.keys().map(String::as_str))
        .collect();

    schema
        .columns
        .iter()
        .filter(|(_, header)| !keys.contains(header))
        .map(|(col, header)| {
            warn!(tab = schema.name, column = %col, "required column is missing");
            Issue::tab_level(
                schema.name,
                Category::MissingColumn,
                format!(
                    "Column '{}' is required in the '{}' tab.",
                    header.escape_debug(),
                    schema.name
                ),
            )
            .with_column(*col)
        })
        .collect()
}
