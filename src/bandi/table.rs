use crate::bandi::model::{Bando, COLUMNS};

/// Name of the single worksheet holding the exported dataset.
pub const SHEET_NAME: &str = "Bandi";

/// A table that will be materialised as an Excel sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Lays the records out as the `Bandi` sheet: the fixed header followed by
/// one row per record, in input order.
pub fn build_sheet(records: &[Bando]) -> SheetTable {
    let columns = COLUMNS
        .iter()
        .map(|column| column.header.to_string())
        .collect();

    let rows = records
        .iter()
        .map(|record| record.values().map(str::to_string).collect())
        .collect();

    SheetTable {
        sheet_name: SHEET_NAME.to_string(),
        columns,
        rows,
    }
}
