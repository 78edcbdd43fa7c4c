//! Sheet files exported as CSV.

mod reader;

pub use reader::{read_csv_sheet, read_csv_workbook};
