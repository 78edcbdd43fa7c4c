//! Shape of the static tab schema tables.

use crate::enums::WorkbookKind;
use crate::ids::{Col, TabId};

/// Expected tab: display name, whether it must exist, and the literal header
/// each logical column is read from.
///
/// Headers are part of the input contract. Embedded line breaks and
/// `default=` annotations must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSchema {
    pub id: TabId,
    pub name: &'static str,
    pub required: bool,
    pub columns: &'static [(Col, &'static str)],
}

impl TabSchema {
    /// Literal header for a logical column, if the tab declares it.
    pub fn header(&self, col: Col) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|(key, _)| *key == col)
            .map(|(_, header)| *header)
    }

    pub fn has_column(&self, col: Col) -> bool {
        self.header(col).is_some()
    }

    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(_, header)| *header)
    }
}

/// Every tab expected in one kind of workbook, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkbookSchema {
    pub kind: WorkbookKind,
    pub tabs: &'static [TabSchema],
}

impl WorkbookSchema {
    pub fn tab(&self, id: TabId) -> Option<&'static TabSchema> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Display name for a tab, falling back to the logical id.
    pub fn tab_name(&self, id: TabId) -> &'static str {
        self.tab(id).map_or(id.as_str(), |tab| tab.name)
    }
}
