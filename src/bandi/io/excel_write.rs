use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::{debug, instrument};

use crate::bandi::error::Result;
use crate::bandi::model::Bando;
use crate::bandi::table::{SheetTable, build_sheet};

/// Writes the table as the only sheet of a new workbook at `path`,
/// replacing any existing file.
#[instrument(
    level = "debug",
    skip_all,
    fields(path = %path.display(), sheet = %table.sheet_name)
)]
pub fn write_workbook(path: &Path, table: &SheetTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.sheet_name)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
        }
    }

    workbook.save(path)?;
    debug!(row_count = table.rows.len() + 1, "workbook saved");
    Ok(())
}

/// Exports the records to `path` as the `Bandi` sheet.
pub fn export_bandi(records: &[Bando], path: &Path) -> Result<()> {
    write_workbook(path, &build_sheet(records))
}
