//! Change-request workbook layout.
//!
//! Only the `Type` and `Facet` tabs carry a column contract; the remaining
//! tabs are recognised but optional.

use crqa_model::{Col, TabId, TabSchema, WorkbookKind, WorkbookSchema};

const TYPE_COLUMNS: &[(Col, &str)] = &[
    (Col::OldQName, "Old Qualified Type Name"),
    (Col::Code, "Change Code"),
    (Col::NewNs, "New NS"),
    (Col::NewName, "New Type Name"),
    (Col::NewDefinition, "Definition"),
    (Col::NewBase, "Qualified Parent / Base Type"),
    (Col::ContentStyle, "Content Style\r\n(CCC, CSC, or S)"),
    (Col::IsAssociation, "Is Association?\r\n(default=FALSE)"),
    (Col::IsAugmentation, "Is Augmentation?\r\n(default=FALSE)"),
    (Col::IsAdapter, "Is Adapter?\r\n(default=FALSE)"),
    (Col::IsMetadata, "Is Metadata?\r\n(default=FALSE)"),
];

const FACET_COLUMNS: &[(Col, &str)] = &[
    (Col::OldTypeQName, "Old Qualified Type"),
    (Col::OldValue, "Old Facet Value"),
    (Col::OldDefinition, "Old Definition"),
    (Col::Code, "Change Code"),
    (Col::NewTypeQName, "New Qualified Type"),
    (Col::NewValue, "New Facet Value"),
    (Col::NewDefinition, "Definition"),
    (Col::NewKind, "Kind of Facet\r\n(default=enumeration)"),
];

const fn optional(id: TabId, name: &'static str) -> TabSchema {
    TabSchema {
        id,
        name,
        required: false,
        columns: &[],
    }
}

pub static CHANGE_REQUEST: WorkbookSchema = WorkbookSchema {
    kind: WorkbookKind::ChangeRequest,
    tabs: &[
        optional(TabId::Readme, "Readme"),
        optional(TabId::ChangeDescription, "ChangeDescription"),
        optional(TabId::Property, "Property"),
        TabSchema {
            id: TabId::Type,
            name: "Type",
            required: true,
            columns: TYPE_COLUMNS,
        },
        optional(TabId::TypeContainsProperty, "TypeContainsProperty"),
        TabSchema {
            id: TabId::Facet,
            name: "Facet",
            required: true,
            columns: FACET_COLUMNS,
        },
        optional(TabId::Namespace, "Namespace"),
        optional(TabId::LocalTerminology, "LocalTerminology"),
        optional(TabId::Union, "Union"),
    ],
};
