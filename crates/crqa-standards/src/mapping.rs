//! Mapping spreadsheet layout.
//!
//! Every tab pairs a source (`1`) side and a target (`2`) side around the
//! mapping code. `Info` holds named cells rather than a row table.

use crqa_model::{Col, TabId, TabSchema, WorkbookKind, WorkbookSchema};

const PROPERTY_COLUMNS: &[(Col, &str)] = &[
    (Col::SourcePrefix, "Source\r\nNS Prefix"),
    (Col::SourceName, "Property Name 1"),
    (Col::SourceType, "Data Type"),
    (Col::SourceDefinition, "Definition 1"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetPrefix, "Target\r\nNS Prefix"),
    (Col::TargetName, "Property Name 2"),
    (Col::TargetType, "Qualified Data Type"),
    (Col::TargetDefinition, "Definition 2"),
    (Col::TargetGroup, "Substitution Group 2"),
    (Col::TargetIsAbstract, "Is Abstract?\r\ndefault=FALSE"),
    (Col::TargetStyle, "Style\r\ndefault=element"),
    (Col::TargetKeywords, "Keywords"),
    (Col::TargetExampleContent, "Example Content"),
    (Col::TargetUsageInfo, "Usage Info"),
];

const TYPE_COLUMNS: &[(Col, &str)] = &[
    (Col::SourcePrefix, "Source\r\nNS Prefix"),
    (Col::SourceName, "Type Name 1"),
    (Col::SourceBase, "Parent / Base Type 1"),
    (Col::SourceDefinition, "Definition 1"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetPrefix, "Target\r\nNS Prefix"),
    (Col::TargetName, "Type Name 2"),
    (Col::TargetBase, "Parent / Base Type 2"),
    (Col::TargetDefinition, "Definition 2"),
    (Col::TargetStyle, "Style 2\r\ndefault=object"),
];

const TYPE_CONTAINS_PROPERTY_COLUMNS: &[(Col, &str)] = &[
    (Col::SourceTypePrefix, "Source\r\nType NS"),
    (Col::SourceTypeName, "Type Name 1"),
    (Col::SourcePropertyPrefix, "Property NS 1"),
    (Col::SourcePropertyName, "Property Name 1"),
    (Col::SourceMin, "Min 1"),
    (Col::SourceMax, "Max 1"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetTypePrefix, "Target\r\nType NS"),
    (Col::TargetTypeName, "Type Name 2"),
    (Col::TargetPropertyPrefix, "Property NS 2"),
    (Col::TargetPropertyName, "Property Name 2"),
    (Col::TargetMin, "Min\r\n(default=0)"),
    (Col::TargetMax, "Max (default\r\n=unbounded)"),
    (
        Col::TargetDefinition,
        "Definition\r\nFor an external property in an adapter type",
    ),
];

const FACET_COLUMNS: &[(Col, &str)] = &[
    (Col::SourcePrefix, "Source\r\nNS Prefix"),
    (Col::SourceName, "Type Name 1"),
    (Col::SourceValue, "Value 1"),
    (Col::SourceDefinition, "Definition 1"),
    (Col::SourceKind, "Kind of Facet 1\r\ndefault=enumeration"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetPrefix, "Target\r\nNS Prefix"),
    (Col::TargetName, "Type Name 2"),
    (Col::TargetValue, "Value 2"),
    (Col::TargetDefinition, "Definition 2"),
    (Col::TargetKind, "Kind of Facet 2\r\ndefault=enumeration"),
];

const NAMESPACE_COLUMNS: &[(Col, &str)] = &[
    (Col::SourcePrefix, "Source\r\nNS Prefix"),
    (Col::SourceUri, "URI 1"),
    (Col::SourceDefinition, "Definition 1"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetPrefix, "Target\r\nNS Prefix"),
    (Col::TargetStyle, "Style 2"),
    (Col::TargetUri, "URI 2"),
    (Col::TargetDefinition, "Definition 2"),
    (Col::TargetNdrVersion, "NDR Version\r\ndefault=4.0"),
    (Col::TargetNdrTarget, "NDR Target 2"),
    (Col::TargetFileName, "File Name 2"),
    (Col::TargetRelativePath, "Relative Path 2"),
    (Col::TargetDraftVersion, "Draft Version 2"),
];

const LOCAL_TERMINOLOGY_COLUMNS: &[(Col, &str)] = &[
    (Col::SourcePrefix, "Source\r\nNS Prefix"),
    (Col::SourceTerm, "Term 1"),
    (Col::SourceLiteral, "Literal 1"),
    (Col::SourceDefinition, "Definition 1"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetPrefix, "Target\r\nNS Prefix"),
    (Col::TargetTerm, "Term 2"),
    (Col::TargetLiteral, "Literal 2"),
    (Col::TargetDefinition, "Definition 2"),
];

const UNION_COLUMNS: &[(Col, &str)] = &[
    (Col::SourceUnionPrefix, "Source\r\nUnion NS"),
    (Col::SourceUnionName, "Union Type Name 1"),
    (Col::SourceMemberPrefix, "Member NS 1"),
    (Col::SourceMemberName, "Member Type Name 1"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetUnionPrefix, "Target\r\nUnion NS"),
    (Col::TargetUnionName, "Union Type Name 2"),
    (Col::TargetMemberPrefix, "Member NS 2"),
    (Col::TargetMemberName, "Member Type Name 2"),
];

const METADATA_COLUMNS: &[(Col, &str)] = &[
    (Col::SourceMetadataPrefix, "Source\r\nMetadata NS"),
    (Col::SourceMetadataName, "Metadata Type Name 1"),
    (Col::SourceAppliesToPrefix, "Applies to NS 1"),
    (Col::SourceAppliesToName, "Applies to Type Name 1"),
    (Col::Code, "Mapping\r\nCode"),
    (Col::Description, "Description"),
    (Col::Notes, "Notes"),
    (Col::TargetMetadataPrefix, "Target\r\nMetadata NS"),
    (Col::TargetMetadataName, "Metadata Type Name 2"),
    (Col::TargetAppliesToPrefix, "Applies to NS 2"),
    (Col::TargetAppliesToName, "Applies to Type Name 2"),
];

const fn required(id: TabId, name: &'static str, columns: &'static [(Col, &'static str)]) -> TabSchema {
    TabSchema {
        id,
        name,
        required: true,
        columns,
    }
}

pub static MAPPING: WorkbookSchema = WorkbookSchema {
    kind: WorkbookKind::Mapping,
    tabs: &[
        required(TabId::Info, "Info", &[]),
        required(TabId::Property, "Property", PROPERTY_COLUMNS),
        required(TabId::Type, "Type", TYPE_COLUMNS),
        required(
            TabId::TypeContainsProperty,
            "Type-Has-Property",
            TYPE_CONTAINS_PROPERTY_COLUMNS,
        ),
        required(TabId::Facet, "Codes", FACET_COLUMNS),
        required(TabId::Namespace, "Namespace", NAMESPACE_COLUMNS),
        required(
            TabId::LocalTerminology,
            "Local Terminology",
            LOCAL_TERMINOLOGY_COLUMNS,
        ),
        required(TabId::Union, "Type Union", UNION_COLUMNS),
        required(TabId::Metadata, "Metadata", METADATA_COLUMNS),
    ],
};
