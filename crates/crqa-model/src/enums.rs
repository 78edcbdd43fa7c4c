//! Closed value domains used by spreadsheet rows.
//!
//! Spreadsheet values are compared literally: change codes and facet kinds
//! are case-sensitive, exactly as authors are instructed to type them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Spreadsheet layout being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkbookKind {
    /// Change-request workbook (`Type` and `Facet` tabs with New/Old columns).
    ChangeRequest,
    /// Mapping spreadsheet (Source/Target column pairs on every tab).
    Mapping,
}

impl WorkbookKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkbookKind::ChangeRequest => "change-request",
            WorkbookKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for WorkbookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkbookKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "change-request" | "changerequest" | "cr" => Ok(WorkbookKind::ChangeRequest),
            "mapping" | "map" => Ok(WorkbookKind::Mapping),
            _ => Err(ParseError::WorkbookKind(s.to_string())),
        }
    }
}

/// Operation requested by a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChangeCode {
    Add,
    Edit,
    Delete,
    Comment,
    NoChange,
    Map,
    Subset,
    NoMatch,
    Documentation,
    Clear,
}

impl ChangeCode {
    pub const ALL: [ChangeCode; 10] = [
        ChangeCode::Add,
        ChangeCode::Edit,
        ChangeCode::Delete,
        ChangeCode::Comment,
        ChangeCode::NoChange,
        ChangeCode::Map,
        ChangeCode::Subset,
        ChangeCode::NoMatch,
        ChangeCode::Documentation,
        ChangeCode::Clear,
    ];

    /// Literal spelling expected in the spreadsheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCode::Add => "add",
            ChangeCode::Edit => "edit",
            ChangeCode::Delete => "delete",
            ChangeCode::Comment => "comment",
            ChangeCode::NoChange => "no change",
            ChangeCode::Map => "map",
            ChangeCode::Subset => "subset",
            ChangeCode::NoMatch => "no match",
            ChangeCode::Documentation => "documentation",
            ChangeCode::Clear => "clear",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == value)
    }
}

impl fmt::Display for ChangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::ChangeCode(s.to_string()))
    }
}

/// Structural shape of a type.
///
/// The change-request workbook spells these `CCC`, `CSC` and `S`; the mapping
/// spreadsheet uses the longer vocabulary (`object`, `simple`, ...). The
/// spelling tables live with the tab schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentStyle {
    /// Complex type with complex content.
    Ccc,
    /// Complex type with simple content.
    Csc,
    Simple,
    Object,
    Adapter,
    Association,
    Augmentation,
    Metadata,
    List,
    Union,
}

/// Partition used by cross-tab type lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StyleClass {
    Simple,
    Csc,
    Ccc,
}

impl ContentStyle {
    pub fn class(&self) -> StyleClass {
        match self {
            ContentStyle::Simple | ContentStyle::List | ContentStyle::Union => StyleClass::Simple,
            ContentStyle::Csc => StyleClass::Csc,
            ContentStyle::Ccc
            | ContentStyle::Object
            | ContentStyle::Adapter
            | ContentStyle::Association
            | ContentStyle::Augmentation
            | ContentStyle::Metadata => StyleClass::Ccc,
        }
    }

    pub fn is_simple(&self) -> bool {
        self.class() == StyleClass::Simple
    }
}

/// Kind of constraint declared by a facet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetKind {
    Enumeration,
    Length,
    MinLength,
    MaxLength,
    Pattern,
    WhiteSpace,
    MaxInclusive,
    MinInclusive,
    MaxExclusive,
    MinExclusive,
    TotalDigits,
    FractionDigits,
}

impl FacetKind {
    pub const ALL: [FacetKind; 12] = [
        FacetKind::Enumeration,
        FacetKind::Length,
        FacetKind::MinLength,
        FacetKind::MaxLength,
        FacetKind::Pattern,
        FacetKind::WhiteSpace,
        FacetKind::MaxInclusive,
        FacetKind::MinInclusive,
        FacetKind::MaxExclusive,
        FacetKind::MinExclusive,
        FacetKind::TotalDigits,
        FacetKind::FractionDigits,
    ];

    /// XML Schema facet name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::Enumeration => "enumeration",
            FacetKind::Length => "length",
            FacetKind::MinLength => "minLength",
            FacetKind::MaxLength => "maxLength",
            FacetKind::Pattern => "pattern",
            FacetKind::WhiteSpace => "whiteSpace",
            FacetKind::MaxInclusive => "maxInclusive",
            FacetKind::MinInclusive => "minInclusive",
            FacetKind::MaxExclusive => "maxExclusive",
            FacetKind::MinExclusive => "minExclusive",
            FacetKind::TotalDigits => "totalDigits",
            FacetKind::FractionDigits => "fractionDigits",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FacetKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::FacetKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_codes_are_case_sensitive() {
        assert_eq!(ChangeCode::parse("add"), Some(ChangeCode::Add));
        assert_eq!(ChangeCode::parse("no change"), Some(ChangeCode::NoChange));
        assert_eq!(ChangeCode::parse("Add"), None);
        assert_eq!(ChangeCode::parse(" add"), None);
        assert!("ADD".parse::<ChangeCode>().is_err());
    }

    #[test]
    fn facet_kind_spelling() {
        assert_eq!(FacetKind::parse("maxLength"), Some(FacetKind::MaxLength));
        assert_eq!(FacetKind::parse("maxlength"), None);
        assert_eq!(FacetKind::WhiteSpace.to_string(), "whiteSpace");
    }

    #[test]
    fn workbook_kind_from_str() {
        assert_eq!(
            "change-request".parse::<WorkbookKind>(),
            Ok(WorkbookKind::ChangeRequest)
        );
        assert_eq!("Mapping".parse::<WorkbookKind>(), Ok(WorkbookKind::Mapping));
        assert!("other".parse::<WorkbookKind>().is_err());
    }

    #[test]
    fn style_classes() {
        assert_eq!(ContentStyle::Simple.class(), StyleClass::Simple);
        assert_eq!(ContentStyle::Union.class(), StyleClass::Simple);
        assert_eq!(ContentStyle::Csc.class(), StyleClass::Csc);
        assert_eq!(ContentStyle::Object.class(), StyleClass::Ccc);
        assert!(!ContentStyle::Ccc.is_simple());
    }
}
