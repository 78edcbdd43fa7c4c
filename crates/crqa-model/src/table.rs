#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::enums::WorkbookKind;
use crate::ids::{Col, TabId};
use crate::schema::TabSchema;

/// Blank-cell sentinel. Loaded rows never distinguish "absent" from "blank".
pub const BLANK: &str = "";

/// One data line as handed over by a spreadsheet parser. Empty cells are
/// simply not present in `cells`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawRecord {
    /// 1-based spreadsheet line; the header occupies line 1.
    pub line: usize,
    pub cells: BTreeMap<String, String>,
}

/// A parsed sheet: header texts and data records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawSheet {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            records: Vec::new(),
        }
    }

    /// Append a record on the next spreadsheet line. Empty values are dropped
    /// the way a parser drops empty cells.
    pub fn push<I, K, V>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let line = self.records.len() + 2;
        let cells = cells
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        self.records.push(RawRecord { line, cells });
        self
    }
}

/// Sheets keyed by exact sheet name.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawWorkbook {
    pub sheets: BTreeMap<String, RawSheet>,
}

impl RawWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, sheet: RawSheet) {
        self.sheets.insert(name.into(), sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.get(name)
    }
}

/// A loaded row: every column declared by the tab schema, blank-filled.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub line: usize,
    pub values: BTreeMap<Col, String>,
}

impl Row {
    pub fn new(line: usize, values: BTreeMap<Col, String>) -> Self {
        Self { line, values }
    }

    /// Value of a column; undeclared columns read as blank.
    pub fn get(&self, col: Col) -> &str {
        self.values.get(&col).map_or(BLANK, String::as_str)
    }

    pub fn is_blank(&self, col: Col) -> bool {
        self.get(col).is_empty()
    }

    /// Literal change code of the row.
    pub fn code(&self) -> &str {
        self.get(Col::Code)
    }
}

/// Runtime tab: populated once by the loader, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Tab {
    pub schema: &'static TabSchema,
    pub present: bool,
    pub rows: Vec<Row>,
}

impl Tab {
    pub fn new(schema: &'static TabSchema) -> Self {
        Self {
            schema,
            present: false,
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.schema.name
    }
}

/// Every expected tab of one submission.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub kind: WorkbookKind,
    pub tabs: BTreeMap<TabId, Tab>,
}

impl Workbook {
    pub fn new(kind: WorkbookKind) -> Self {
        Self {
            kind,
            tabs: BTreeMap::new(),
        }
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.get(&id)
    }

    /// Rows of a tab; empty when the tab is unknown or absent.
    pub fn rows(&self, id: TabId) -> &[Row] {
        self.tabs.get(&id).map_or(&[], |tab| tab.rows.as_slice())
    }

    pub fn tab_name(&self, id: TabId) -> &'static str {
        self.tabs.get(&id).map_or(id.as_str(), Tab::name)
    }

    pub fn row_count(&self) -> usize {
        self.tabs.values().map(|tab| tab.rows.len()).sum()
    }
}
