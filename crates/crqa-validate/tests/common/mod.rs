#![allow(dead_code)]

use crqa_model::{Col, RawSheet, RawWorkbook, TabId, WorkbookKind};
use crqa_standards::workbook_schema;

/// Builds a raw workbook with every required tab present and empty.
pub struct WorkbookBuilder {
    kind: WorkbookKind,
    raw: RawWorkbook,
}

impl WorkbookBuilder {
    pub fn new(kind: WorkbookKind) -> Self {
        let mut raw = RawWorkbook::new();
        for tab in workbook_schema(kind).tabs.iter().filter(|tab| tab.required) {
            raw.insert(tab.name, RawSheet::new(tab.headers()));
        }
        Self { kind, raw }
    }

    pub fn change_request() -> Self {
        Self::new(WorkbookKind::ChangeRequest)
    }

    pub fn mapping() -> Self {
        Self::new(WorkbookKind::Mapping)
    }

    pub fn kind(&self) -> WorkbookKind {
        self.kind
    }

    /// Append a data row; cells are given by logical column.
    pub fn row(mut self, tab: TabId, cells: &[(Col, &str)]) -> Self {
        let schema = workbook_schema(self.kind).tab(tab).expect("tab in schema");
        let cells: Vec<(&str, &str)> = cells
            .iter()
            .map(|(col, value)| (schema.header(*col).expect("declared column"), *value))
            .collect();
        self.raw
            .sheets
            .entry(schema.name.to_string())
            .or_insert_with(|| RawSheet::new(schema.headers()))
            .push(cells);
        self
    }

    pub fn without_tab(mut self, tab: TabId) -> Self {
        let name = workbook_schema(self.kind).tab_name(tab);
        self.raw.sheets.remove(name);
        self
    }

    /// Remove one header from a tab, together with its cells.
    pub fn drop_header(mut self, tab: TabId, col: Col) -> Self {
        let schema = workbook_schema(self.kind).tab(tab).expect("tab in schema");
        let header = schema.header(col).expect("declared column");
        if let Some(sheet) = self.raw.sheets.get_mut(schema.name) {
            sheet.headers.retain(|h| h != header);
            for record in &mut sheet.records {
                record.cells.remove(header);
            }
        }
        self
    }

    pub fn build(self) -> RawWorkbook {
        self.raw
    }
}

/// The well-formed change-request type row used across scenarios.
pub fn widget_code_type() -> Vec<(Col, &'static str)> {
    vec![
        (Col::Code, "add"),
        (Col::NewNs, "ext"),
        (Col::NewName, "WidgetCodeSimpleType"),
        (Col::NewDefinition, "A data type for widget codes."),
        (Col::NewBase, "xs:token"),
        (Col::ContentStyle, "S"),
    ]
}

pub fn widget_code_facet() -> Vec<(Col, &'static str)> {
    vec![
        (Col::Code, "add"),
        (Col::NewTypeQName, "ext:WidgetCodeSimpleType"),
        (Col::NewKind, "enumeration"),
        (Col::NewValue, "A"),
        (Col::NewDefinition, "Option A."),
    ]
}

/// Replace (or add) one cell of a row description.
pub fn with(
    mut cells: Vec<(Col, &'static str)>,
    col: Col,
    value: &'static str,
) -> Vec<(Col, &'static str)> {
    match cells.iter_mut().find(|(c, _)| *c == col) {
        Some(cell) => cell.1 = value,
        None => cells.push((col, value)),
    }
    cells
}
