use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::board::*;

/// Reads all the cells of a worksheet as text.
///
/// Without a worksheet name, the first worksheet of the workbook is used.
pub fn read_excel_grid(path: &str, worksheet: &Option<String>) -> BoardResult<Vec<Vec<String>>> {
    let wrange = get_range(path, worksheet)?;

    let mut res: Vec<Vec<String>> = Vec::new();
    for (idx, row) in wrange.rows().enumerate() {
        let mut cells: Vec<String> = Vec::with_capacity(row.len());
        for cell in row.iter() {
            cells.push(read_cell(cell, idx + 1)?);
        }
        debug!("read_excel_grid: idx: {:?} row: {:?}", idx, cells);
        res.push(cells);
    }
    Ok(res)
}

fn read_cell(cell: &DataType, lineno: usize) -> BoardResult<String> {
    match cell {
        DataType::String(s) => Ok(s.clone()),
        DataType::Empty => Ok("".to_string()),
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Float(f) => Ok(f.to_string()),
        DataType::Bool(b) => Ok(b.to_string()),
        // Date headers become ISO dates (YYYY-MM-DD).
        DataType::DateTime(f) => match cell.as_date() {
            Some(d) => Ok(d.to_string()),
            None => {
                warn!(
                    "read_cell: row {}: date cell {} is out of range, kept as a serial number",
                    lineno, f
                );
                Ok(f.to_string())
            }
        },
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

fn get_range(path: &str, worksheet: &Option<String>) -> BoardResult<calamine::Range<DataType>> {
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        path, worksheet
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    let wrange_o = match worksheet {
        Some(worksheet_name) => workbook.worksheet_range(worksheet_name),
        None => workbook.worksheet_range_at(0),
    };
    let wrange = wrange_o
        .context(MissingWorksheetSnafu {
            path,
            worksheet: worksheet.clone().unwrap_or_else(|| "#0".to_string()),
        })?
        .context(OpeningExcelSnafu { path })?;
    Ok(wrange)
}
