use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

use crate::error::AppError;
use crate::models::{SheetData, NO_VALUE};

/// Read every sheet of an `.xlsx` workbook, in workbook order, skipping each
/// sheet's header row. Cells are trimmed; empty cells read as `"None"`.
pub fn load(path: &Path) -> Result<Vec<SheetData>, AppError> {
    tracing::info!("Opening workbook {}", path.display());
    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| AppError::MalformedInputFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    tracing::info!("Found {} sheets: {:?}", sheet_names.len(), sheet_names);

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| AppError::MalformedInputFile {
                path: path.to_path_buf(),
                reason: format!("Failed to read sheet '{}': {}", sheet_name, e),
            })?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .skip(1) // Skip header row
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        sheets.push(SheetData {
            name: sheet_name.clone(),
            rows,
        });
    }

    Ok(sheets)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => NO_VALUE.to_string(),
        other => other.to_string().trim().to_string(),
    }
}
