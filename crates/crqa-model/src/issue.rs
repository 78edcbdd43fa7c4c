//! Validation findings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::Col;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Structural problem; the workbook cannot be checked further.
    Reject,
    /// Must fix before the change is accepted.
    Error,
    /// Style guidance; should review.
    Warning,
}

/// Kind of finding. Each category has a fixed severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    MissingTab,
    MissingColumn,
    InvalidChangeCode,
    RequiredField,
    InvalidFormat,
    InvalidValue,
    InvalidReference,
    DuplicateName,
    NamingConvention,
    InvalidField,
    /// Advisory naming guidance.
    Advisory,
}

impl Category {
    /// Label written to the `Category` column of a report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingTab => "Missing tab",
            Self::MissingColumn => "Missing column",
            Self::InvalidChangeCode => "Invalid change code",
            Self::RequiredField => "Required field",
            Self::InvalidFormat => "Invalid format",
            Self::InvalidValue => "Invalid value",
            Self::InvalidReference => "Invalid reference",
            Self::DuplicateName => "Duplicate name",
            Self::NamingConvention => "Naming convention",
            Self::InvalidField => "Invalid field",
            Self::Advisory => "Warning",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingTab | Self::MissingColumn => Severity::Reject,
            Self::Advisory => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Tab- and column-presence problems stop the semantic phase.
    pub fn is_structural(&self) -> bool {
        self.severity() == Severity::Reject
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One validation finding.
///
/// `row` and `column` are `None` for tab-level problems; `column` alone is set
/// for a missing column; `value` carries the offending literal when there is
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    pub tab: String,
    pub row: Option<usize>,
    pub column: Option<Col>,
    pub label: String,
    pub value: Option<String>,
    pub category: Category,
    pub description: String,
}

impl Issue {
    /// A finding about the tab as a whole.
    pub fn tab_level(
        tab: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tab: tab.into(),
            row: None,
            column: None,
            label: String::new(),
            value: None,
            category,
            description: description.into(),
        }
    }

    /// A finding about one cell (or one row, when `column` is `None`).
    pub fn at_row(
        tab: impl Into<String>,
        row: usize,
        column: Option<Col>,
        label: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tab: tab.into(),
            row: Some(row),
            column,
            label: label.into(),
            value: None,
            category,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: Col) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.category.severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_severity() {
        assert_eq!(Category::MissingTab.severity(), Severity::Reject);
        assert_eq!(Category::Advisory.severity(), Severity::Warning);
        assert_eq!(Category::NamingConvention.severity(), Severity::Error);
        assert!(Category::MissingColumn.is_structural());
        assert!(!Category::RequiredField.is_structural());
    }

    #[test]
    fn tab_level_issue_has_no_location() {
        let issue = Issue::tab_level("Type", Category::MissingTab, "missing");
        assert_eq!(issue.row, None);
        assert_eq!(issue.column, None);
        assert_eq!(issue.severity(), Severity::Reject);
    }

    #[test]
    fn row_issue_carries_value() {
        let issue = Issue::at_row(
            "Type",
            4,
            Some(Col::NewBase),
            "ext:WidgetType",
            Category::InvalidReference,
            "unresolved",
        )
        .with_value("ext:NotDefinedSimpleType");
        assert_eq!(issue.row, Some(4));
        assert_eq!(issue.value.as_deref(), Some("ext:NotDefinedSimpleType"));
    }
}
