pub use crate::config::*;
use crate::table::parse_dataset;

/// A builder for assembling a grid row by row.
///
/// The grid has the same shape as a spreadsheet export: a header row with an
/// empty corner cell followed by the dates, then one row per participant.
///
/// ```
/// use streak_ranking::builder::Builder;
/// use streak_ranking::TableOptions;
/// # use streak_ranking::TableError;
///
/// let mut builder = Builder::new(&["Mon".to_string(), "Tue".to_string()]);
///
/// builder.add_row("Anna", &["✅".to_string(), "".to_string()]);
/// builder.add_marks("Bob", &[2, 1]);
///
/// let dataset = builder.dataset(&TableOptions::default())?;
/// assert_eq!(dataset.participants[1].stats.points, 3);
///
/// # Ok::<(), TableError>(())
/// ```
pub struct Builder {
    pub(crate) _dates: Vec<String>,
    pub(crate) _rows: Vec<Vec<String>>,
}

impl Builder {
    pub fn new(dates: &[String]) -> Builder {
        Builder {
            _dates: dates.to_vec(),
            _rows: Vec::new(),
        }
    }

    /// Adds a participant with the raw content of its cells.
    pub fn add_row(&mut self, name: &str, cells: &[String]) {
        let mut row = vec![name.to_string()];
        row.extend(cells.iter().cloned());
        self._rows.push(row);
    }

    /// Adds a participant with a number of completions per day.
    ///
    /// The completions are written with the first default mark.
    pub fn add_marks(&mut self, name: &str, counts: &[u32]) {
        let mark = TableOptions::DEFAULT_MARKS[0];
        let cells: Vec<String> = counts.iter().map(|c| mark.repeat(*c as usize)).collect();
        self.add_row(name, &cells);
    }

    /// The grid, header row included.
    pub fn grid(&self) -> Vec<Vec<String>> {
        let mut header = vec!["".to_string()];
        header.extend(self._dates.iter().cloned());
        let mut res = vec![header];
        res.extend(self._rows.iter().cloned());
        res
    }

    pub fn dataset(&self, options: &TableOptions) -> Result<Dataset, TableError> {
        parse_dataset(&self.grid(), options)
    }
}
