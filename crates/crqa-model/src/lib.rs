//! Data model for change-request and mapping spreadsheet QA.
//!
//! - raw parser output ([`RawWorkbook`]) and loaded, schema-keyed rows
//!   ([`Workbook`], [`Tab`], [`Row`])
//! - tab schema shapes ([`TabSchema`], [`WorkbookSchema`])
//! - findings ([`Issue`], [`Category`], [`Severity`]) and per-check result
//!   buckets ([`Test`], [`TestSuite`])

pub mod conformance;
pub mod enums;
pub mod error;
pub mod ids;
pub mod issue;
pub mod schema;
pub mod table;

pub use conformance::{CheckId, Test, TestSuite};
pub use enums::{ChangeCode, ContentStyle, FacetKind, StyleClass, WorkbookKind};
pub use error::{ParseError, Result};
pub use ids::{Col, TabId};
pub use issue::{Category, Issue, Severity};
pub use schema::{TabSchema, WorkbookSchema};
pub use table::{BLANK, RawRecord, RawSheet, RawWorkbook, Row, Tab, Workbook};
