// Primitives for reading CSV files.

use crate::board::*;

/// Reads all the cells of a CSV file. The first line is kept as a regular row
/// and the rows may have different lengths.
pub fn read_csv_grid(path: &str) -> BoardResult<Vec<Vec<String>>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;

    let mut res: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        let row: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        debug!("read_csv_grid: lineno: {:?} row: {:?}", lineno, row);
        res.push(row);
    }
    Ok(res)
}
