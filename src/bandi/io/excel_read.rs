use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::bandi::error::{Result, ToolError};

/// Reads every row of `sheet` as text, header included.
///
/// Every row spans the full width of the used range; blank cells read as the
/// empty string.
pub fn read_sheet_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let range = workbook
        .worksheet_range(sheet)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{sheet}'")))?
        .map_err(ToolError::from)?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
        .collect())
}

/// Lists the sheet names of the workbook at `path`, in workbook order.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook: Xlsx<_> = open_workbook(path)?;
    Ok(workbook.sheet_names().to_vec())
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
