// Reading the raw grid: dates from the first row, one participant per named row.

use log::{debug, info, warn};
use snafu::{ensure, OptionExt};
use std::collections::HashSet;

use crate::config::*;
use crate::metrics::compute_stats;

/// A named row of the grid, as read from the cells.
/// This is before computing any statistic.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedRow {
    pub id: usize,
    pub name: String,
    pub history: Vec<u32>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedTable {
    pub dates: Vec<String>,
    pub rows: Vec<ParsedRow>,
}

/// Reads the dates and the per-day completion counts of a grid.
///
/// The first row holds the dates (its first cell is ignored) and the first
/// column holds the names of the participants. Rows without a name are
/// skipped. Missing cells at the end of a short row count as no completion.
pub fn parse_table<S: AsRef<str>>(
    grid: &[Vec<S>],
    options: &TableOptions,
) -> Result<ParsedTable, TableError> {
    ensure!(grid.len() >= 2, EmptyDatasetSnafu { rows: grid.len() });

    let marks: Vec<&str> = options
        .marks
        .iter()
        .map(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .collect();
    ensure!(
        !marks.is_empty(),
        ParseSnafu {
            row: 0usize,
            message: "no completion mark to look for",
        }
    );

    // The column each date label came from.
    let date_columns: Vec<(usize, String)> = grid[0]
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(col, cell)| {
            let label = cell.as_ref().trim();
            if label.is_empty() {
                None
            } else {
                Some((col, label.to_string()))
            }
        })
        .collect();
    debug!("parse_table: date_columns: {:?}", date_columns);

    let dates: Vec<String> = date_columns.iter().map(|(_, l)| l.clone()).collect();
    {
        let mut seen: HashSet<&str> = HashSet::new();
        for d in dates.iter() {
            if !seen.insert(d.as_str()) {
                warn!("parse_table: date {:?} appears more than once", d);
            }
        }
    }

    let read_columns: Vec<usize> = match options.alignment {
        HeaderAlignment::Positional => (1..=dates.len()).collect(),
        HeaderAlignment::ByColumn => date_columns.iter().map(|(col, _)| *col).collect(),
    };

    let mut rows: Vec<ParsedRow> = Vec::new();
    let mut names: HashSet<String> = HashSet::new();
    for (row_idx, row) in grid.iter().enumerate().skip(1) {
        let name = row.first().map(|s| s.as_ref().trim()).unwrap_or("");
        if name.is_empty() {
            debug!("parse_table: row {}: no name, skipping", row_idx);
            continue;
        }
        if !names.insert(name.to_string()) {
            warn!("parse_table: row {}: name {:?} already seen", row_idx, name);
        }

        let mut history: Vec<u32> = Vec::with_capacity(read_columns.len());
        for col in read_columns.iter() {
            let cell = row.get(*col).map(|s| s.as_ref()).unwrap_or("");
            let count = count_marks(cell, &marks).with_context(|| ParseSnafu {
                row: row_idx,
                message: format!("too many completion marks in column {}", col),
            })?;
            history.push(count);
        }
        debug!("parse_table: row {}: {} {:?}", row_idx, name, history);

        rows.push(ParsedRow {
            id: row_idx,
            name: name.to_string(),
            history,
        });
    }

    info!(
        "parse_table: {} dates, {} participants (out of {} data rows)",
        dates.len(),
        rows.len(),
        grid.len() - 1
    );
    Ok(ParsedTable { dates, rows })
}

/// Parses a grid and computes the statistics of every participant.
///
/// Either the whole grid is turned into a dataset or an error is returned.
pub fn parse_dataset<S: AsRef<str>>(
    grid: &[Vec<S>],
    options: &TableOptions,
) -> Result<Dataset, TableError> {
    let table = parse_table(grid, options)?;
    let participants: Vec<Participant> = table
        .rows
        .into_iter()
        .map(|r| {
            let stats = compute_stats(&r.history);
            Participant {
                id: r.id,
                name: r.name,
                history: r.history,
                stats,
            }
        })
        .collect();
    Ok(Dataset {
        dates: table.dates,
        participants,
        fingerprint: grid_fingerprint(grid, options),
    })
}

/// The number of completion marks in a cell, if it fits in a day counter.
///
/// The cell is scanned from left to right and the longest mark matching at
/// each position is consumed, so a mark that contains another one (`✔️` and
/// `✔`) is counted once.
fn count_marks(cell: &str, marks: &[&str]) -> Option<u32> {
    let mut rest = cell.trim();
    let mut count: u32 = 0;
    while let Some(c) = rest.chars().next() {
        let longest = marks
            .iter()
            .filter(|m| rest.starts_with(*m))
            .map(|m| m.len())
            .max();
        match longest {
            Some(len) => {
                count = count.checked_add(1)?;
                rest = &rest[len..];
            }
            None => {
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    Some(count)
}

// Unit and record separators cannot be typed in a spreadsheet cell.
fn grid_fingerprint<S: AsRef<str>>(grid: &[Vec<S>], options: &TableOptions) -> String {
    let mut content = format!("{:?}\u{1d}", options);
    for row in grid.iter() {
        for cell in row.iter() {
            content.push_str(cell.as_ref());
            content.push('\u{1f}');
        }
        content.push('\u{1e}');
    }
    sha256::digest(content)
}
