//! Logical tab and column identifiers.
//!
//! Rule code never indexes rows by header text. Headers are mapped onto these
//! keys once, by the row loader, using the tab schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical tab of a workbook. Display names differ per workbook kind and are
/// carried by the tab schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TabId {
    Readme,
    ChangeDescription,
    Info,
    Property,
    Type,
    TypeContainsProperty,
    Facet,
    Namespace,
    LocalTerminology,
    Union,
    Metadata,
}

impl TabId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Readme => "Readme",
            TabId::ChangeDescription => "ChangeDescription",
            TabId::Info => "Info",
            TabId::Property => "Property",
            TabId::Type => "Type",
            TabId::TypeContainsProperty => "TypeContainsProperty",
            TabId::Facet => "Facet",
            TabId::Namespace => "Namespace",
            TabId::LocalTerminology => "LocalTerminology",
            TabId::Union => "Union",
            TabId::Metadata => "Metadata",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logical column key.
///
/// `Source*`/`Target*` keys belong to the mapping spreadsheet, `Old*`/`New*`
/// keys to the change-request workbook. `Code`, `Description` and `Notes`
/// are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Col {
    // Shared
    Code,
    Description,
    Notes,

    // Mapping: source side
    SourcePrefix,
    SourceName,
    SourceType,
    SourceBase,
    SourceDefinition,
    SourceValue,
    SourceKind,
    SourceUri,
    SourceTerm,
    SourceLiteral,
    SourceTypePrefix,
    SourceTypeName,
    SourcePropertyPrefix,
    SourcePropertyName,
    SourceMin,
    SourceMax,
    SourceUnionPrefix,
    SourceUnionName,
    SourceMemberPrefix,
    SourceMemberName,
    SourceMetadataPrefix,
    SourceMetadataName,
    SourceAppliesToPrefix,
    SourceAppliesToName,

    // Mapping: target side
    TargetPrefix,
    TargetName,
    TargetType,
    TargetBase,
    TargetDefinition,
    TargetGroup,
    TargetIsAbstract,
    TargetStyle,
    TargetKeywords,
    TargetExampleContent,
    TargetUsageInfo,
    TargetValue,
    TargetKind,
    TargetUri,
    TargetNdrVersion,
    TargetNdrTarget,
    TargetFileName,
    TargetRelativePath,
    TargetDraftVersion,
    TargetTerm,
    TargetLiteral,
    TargetTypePrefix,
    TargetTypeName,
    TargetPropertyPrefix,
    TargetPropertyName,
    TargetMin,
    TargetMax,
    TargetUnionPrefix,
    TargetUnionName,
    TargetMemberPrefix,
    TargetMemberName,
    TargetMetadataPrefix,
    TargetMetadataName,
    TargetAppliesToPrefix,
    TargetAppliesToName,

    // Change request
    OldQName,
    OldTypeQName,
    OldValue,
    OldDefinition,
    NewNs,
    NewName,
    NewDefinition,
    NewBase,
    NewTypeQName,
    NewValue,
    NewKind,
    ContentStyle,
    IsAssociation,
    IsAugmentation,
    IsAdapter,
    IsMetadata,
}

impl Col {
    /// Logical key name, as used in issue reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Col::Code => "Code",
            Col::Description => "Description",
            Col::Notes => "Notes",
            Col::SourcePrefix => "SourcePrefix",
            Col::SourceName => "SourceName",
            Col::SourceType => "SourceType",
            Col::SourceBase => "SourceBase",
            Col::SourceDefinition => "SourceDefinition",
            Col::SourceValue => "SourceValue",
            Col::SourceKind => "SourceKind",
            Col::SourceUri => "SourceURI",
            Col::SourceTerm => "SourceTerm",
            Col::SourceLiteral => "SourceLiteral",
            Col::SourceTypePrefix => "SourceTypePrefix",
            Col::SourceTypeName => "SourceTypeName",
            Col::SourcePropertyPrefix => "SourcePropertyPrefix",
            Col::SourcePropertyName => "SourcePropertyName",
            Col::SourceMin => "SourceMin",
            Col::SourceMax => "SourceMax",
            Col::SourceUnionPrefix => "SourceUnionPrefix",
            Col::SourceUnionName => "SourceUnionName",
            Col::SourceMemberPrefix => "SourceMemberPrefix",
            Col::SourceMemberName => "SourceMemberName",
            Col::SourceMetadataPrefix => "SourceMetadataPrefix",
            Col::SourceMetadataName => "SourceMetadataName",
            Col::SourceAppliesToPrefix => "SourceAppliesToPrefix",
            Col::SourceAppliesToName => "SourceAppliesToName",
            Col::TargetPrefix => "TargetPrefix",
            Col::TargetName => "TargetName",
            Col::TargetType => "TargetType",
            Col::TargetBase => "TargetBase",
            Col::TargetDefinition => "TargetDefinition",
            Col::TargetGroup => "TargetGroup",
            Col::TargetIsAbstract => "TargetIsAbstract",
            Col::TargetStyle => "TargetStyle",
            Col::TargetKeywords => "TargetKeywords",
            Col::TargetExampleContent => "TargetExampleContent",
            Col::TargetUsageInfo => "TargetUsageInfo",
            Col::TargetValue => "TargetValue",
            Col::TargetKind => "TargetKind",
            Col::TargetUri => "TargetURI",
            Col::TargetNdrVersion => "TargetNDRVersion",
            Col::TargetNdrTarget => "TargetNDRTarget",
            Col::TargetFileName => "TargetFileName",
            Col::TargetRelativePath => "TargetRelativePath",
            Col::TargetDraftVersion => "TargetDraftVersion",
            Col::TargetTerm => "TargetTerm",
            Col::TargetLiteral => "TargetLiteral",
            Col::TargetTypePrefix => "TargetTypePrefix",
            Col::TargetTypeName => "TargetTypeName",
            Col::TargetPropertyPrefix => "TargetPropertyPrefix",
            Col::TargetPropertyName => "TargetPropertyName",
            Col::TargetMin => "TargetMin",
            Col::TargetMax => "TargetMax",
            Col::TargetUnionPrefix => "TargetUnionPrefix",
            Col::TargetUnionName => "TargetUnionName",
            Col::TargetMemberPrefix => "TargetMemberPrefix",
            Col::TargetMemberName => "TargetMemberName",
            Col::TargetMetadataPrefix => "TargetMetadataPrefix",
            Col::TargetMetadataName => "TargetMetadataName",
            Col::TargetAppliesToPrefix => "TargetAppliesToPrefix",
            Col::TargetAppliesToName => "TargetAppliesToName",
            Col::OldQName => "OldQName",
            Col::OldTypeQName => "OldTypeQName",
            Col::OldValue => "OldValue",
            Col::OldDefinition => "OldDefinition",
            Col::NewNs => "NewNS",
            Col::NewName => "NewName",
            Col::NewDefinition => "NewDefinition",
            Col::NewBase => "NewBase",
            Col::NewTypeQName => "NewTypeQName",
            Col::NewValue => "NewValue",
            Col::NewKind => "NewKind",
            Col::ContentStyle => "ContentStyle",
            Col::IsAssociation => "IsAssociation",
            Col::IsAugmentation => "IsAugmentation",
            Col::IsAdapter => "IsAdapter",
            Col::IsMetadata => "IsMetadata",
        }
    }
}

impl fmt::Display for Col {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
