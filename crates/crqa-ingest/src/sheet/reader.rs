//! Reads a workbook exported as one CSV file per tab.

use std::path::Path;

use tracing::debug;

use crqa_model::{RawRecord, RawSheet, RawWorkbook, WorkbookSchema};

use crate::error::{IngestError, Result};

/// Read `<dir>/<tab name>.csv` for every tab of the schema.
///
/// Tabs without a file are left out of the workbook; the loader decides
/// whether that is a problem.
pub fn read_csv_workbook(dir: &Path, schema: &WorkbookSchema) -> Result<RawWorkbook> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut workbook = RawWorkbook::new();
    for tab in schema.tabs {
        let path = dir.join(format!("{}.csv", tab.name));
        if !path.is_file() {
            debug!(tab = tab.name, path = %path.display(), "no sheet file");
            continue;
        }
        let sheet = read_csv_sheet(&path)?;
        debug!(tab = tab.name, records = sheet.records.len(), "read sheet");
        workbook.insert(tab.name, sheet);
    }
    Ok(workbook)
}

/// Read one sheet. Header texts are kept verbatim (no trimming) since they
/// are matched literally. Rows without any value are skipped; every other
/// row keeps its spreadsheet line number.
pub fn read_csv_sheet(path: &Path) -> Result<RawSheet> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let contents = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_slice());
    let mut records = reader.records();
    let mut rows = RowCounter::new(&contents);

    let Some(header_record) = records.next().transpose().map_err(csv_error)? else {
        return Ok(RawSheet::new(Vec::<String>::new()));
    };
    rows.row_of(&header_record);
    let mut sheet = RawSheet::new(header_record.iter());

    for result in records {
        let record = result.map_err(csv_error)?;
        let line = rows.row_of(&record);
        let cells: std::collections::BTreeMap<String, String> = sheet
            .headers
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        if cells.is_empty() {
            continue;
        }
        sheet.records.push(RawRecord { line, cells });
    }

    Ok(sheet)
}

/// Maps csv records back to spreadsheet rows.
///
/// The csv reader drops blank lines, and a quoted cell may span several file
/// lines while still being one row. A record's row is its first file line
/// minus the line breaks held inside earlier cells.
struct RowCounter<'a> {
    contents: &'a [u8],
    folded: usize,
    last_row: usize,
}

impl<'a> RowCounter<'a> {
    fn new(contents: &'a [u8]) -> Self {
        Self {
            contents,
            folded: 0,
            last_row: 0,
        }
    }

    /// Row of `record`. Records must be passed in reading order.
    fn row_of(&mut self, record: &csv::StringRecord) -> usize {
        let row = self
            .first_line(record)
            .map_or(self.last_row + 1, |line| line.saturating_sub(self.folded));
        self.folded += record
            .iter()
            .map(|field| field.matches('\n').count())
            .sum::<usize>();
        self.last_row = row;
        row
    }

    /// File line of the record's first byte. The recorded position may sit
    /// before the line terminators the reader skipped to reach it.
    fn first_line(&self, record: &csv::StringRecord) -> Option<usize> {
        let position = record.position()?;
        let offset = usize::try_from(position.byte()).ok()?;
        let line = usize::try_from(position.line()).ok()?;
        let skipped = self
            .contents
            .get(offset..)?
            .iter()
            .take_while(|byte| matches!(**byte, b'\r' | b'\n'))
            .filter(|byte| **byte == b'\n')
            .count();
        Some(line + skipped)
    }
}
