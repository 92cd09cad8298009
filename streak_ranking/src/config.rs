// ********* Input data structures ***********

use std::collections::BTreeSet;

use snafu::Snafu;

/// How the date labels of the header row are matched with the cells of a row.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum HeaderAlignment {
    /// Day `i` reads the cell in column `i + 1`, whatever column its label
    /// came from. This matches the spreadsheets produced so far, but it
    /// shifts the days when a blank header sits between two dates.
    Positional,
    /// Day `i` reads the cell under its own label.
    ByColumn,
}

/// Options for turning a raw grid into a dataset.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TableOptions {
    /// The completion marks. Every occurrence of any of them in a cell counts
    /// as one completion for that day.
    pub marks: Vec<String>,
    pub alignment: HeaderAlignment,
}

impl TableOptions {
    pub const DEFAULT_MARKS: [&'static str; 3] = ["✅", "✓", "✔"];
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            marks: TableOptions::DEFAULT_MARKS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            alignment: HeaderAlignment::Positional,
        }
    }
}

// ******** Dataset *********

/// Statistics derived from the history of one participant.
///
/// They are always recomputed from scratch when a grid is parsed.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Stats {
    /// Sum of all the completions.
    pub points: u64,
    /// Number of days with at least one completion.
    pub consistency_days: usize,
    /// Length of the run of active days ending on the last day.
    pub current_streak: usize,
    /// Length of the longest run of active days.
    pub max_streak: usize,
    /// The days of every run that reaches `max_streak`.
    pub max_streak_days: BTreeSet<usize>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Participant {
    /// Position of the row in the source grid (the header is row 0).
    pub id: usize,
    pub name: String,
    /// Completion count for each date, in date order.
    pub history: Vec<u32>,
    pub stats: Stats,
}

impl Participant {
    pub fn is_active(&self, day: usize) -> bool {
        self.history.get(day).map_or(false, |c| *c > 0)
    }
}

/// A parsed grid: the dates and all the named participants.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Dataset {
    pub dates: Vec<String>,
    pub participants: Vec<Participant>,
    /// SHA-256 of the content of the source grid.
    pub fingerprint: String,
}

// ********* Configuration **********

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ScoringMode {
    Points,
    Consistency,
    Streak,
}

/// The ranking disciplines.
///
/// - Dense: equal scores share a rank and the next distinct score gets the
///   next rank (`0, 0, 1`).
///
/// - Competition: the rank is the position in the sorted list, even for
///   equal scores (`0, 1, 2`).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum RankDiscipline {
    Dense,
    Competition,
}

/// The parameters of a leaderboard view. They are owned by the caller and
/// only read here.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct ViewConfig {
    pub scoring_mode: ScoringMode,
    pub rank_discipline: RankDiscipline,
    /// Ignore the days on which nobody was active. Only used by the
    /// consistency and streak modes.
    pub soft_mode: bool,
    /// Rank on the longest streak instead of the current one. Only used by
    /// the streak mode.
    pub use_max_streak: bool,
}

impl ViewConfig {
    pub const DEFAULT_VIEW: ViewConfig = ViewConfig {
        scoring_mode: ScoringMode::Points,
        rank_discipline: RankDiscipline::Competition,
        soft_mode: false,
        use_max_streak: false,
    };
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig::DEFAULT_VIEW
    }
}

// ******** Output data structures *********

/// One column of the compact day table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Column {
    /// A day on which at least one participant was active.
    Day { index: usize, label: String },
    /// Stands for a run of consecutive days on which nobody was active.
    Break,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Standing {
    pub participant: Participant,
    /// 0-based rank under the discipline of the view.
    pub rank: usize,
    /// The value the participant was ranked on.
    pub score: u64,
    /// The score as a rounded percentage of the denominator. It may go above
    /// 100 for points, since a day can hold several completions.
    pub percent: u32,
}

impl Standing {
    pub fn podium(&self) -> Option<Podium> {
        Podium::for_rank(self.rank)
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Leaderboard {
    pub dates: Vec<String>,
    /// Number of days the percentages are computed against.
    pub denominator: usize,
    pub columns: Vec<Column>,
    pub standings: Vec<Standing>,
}

/// Errors that prevent a grid from becoming a dataset.
#[derive(Debug, Snafu, Eq, PartialEq, Clone)]
#[snafu(visibility(pub(crate)))]
pub enum TableError {
    #[snafu(display("The grid needs a header row and at least one data row, found {rows} row(s)"))]
    EmptyDataset { rows: usize },
    #[snafu(display("Failed to process row {row}: {message}"))]
    Parse { row: usize, message: String },
}
