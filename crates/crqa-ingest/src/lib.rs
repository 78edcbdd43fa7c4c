//! Workbook ingestion.
//!
//! This crate turns parser output into schema-keyed rows and, for command
//! line use, reads a workbook exported as one CSV file per tab.
//!
//! # Features
//!
//! - **Row Loading**: Apply a tab schema, blank-fill cells, report missing
//!   tabs and columns
//! - **CSV Reading**: Read `<dir>/<tab name>.csv` sheets into a raw workbook
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use crqa_ingest::{load_workbook, read_csv_workbook};
//! use crqa_standards::CHANGE_REQUEST;
//!
//! let raw = read_csv_workbook(Path::new("submissions/cr-42"), &CHANGE_REQUEST)?;
//! let loaded = load_workbook(&raw, &CHANGE_REQUEST);
//! assert!(loaded.is_well_formed());
//! ```

mod error;
mod loader;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use sheet::{read_csv_sheet, read_csv_workbook};

// === Row Loading ===
pub use loader::{LoadedWorkbook, load_workbook};
