/*!
Scoring, streak and ranking engine for attendance-style leaderboards.

A grid (first row: the dates, first column: the names, cells: completion
marks) is turned into a [Dataset], and a dataset is turned into a
[Leaderboard] for a given [ViewConfig].

```
use streak_ranking::*;

let grid = vec![
    vec!["", "Day1", "Day2", "Day3"],
    vec!["Alice", "✓", "", "✓✓"],
    vec!["Bob", "", "", ""],
];
let dataset = parse_dataset(&grid, &TableOptions::default())?;
let board = build_leaderboard(&dataset, &ViewConfig::DEFAULT_VIEW);
assert_eq!(board.standings[0].participant.name, "Alice");
assert_eq!(board.standings[0].score, 3);
# Ok::<(), TableError>(())
```

See the [manual] for the details of each mode.
*/

pub mod builder;
mod columns;
mod config;
pub mod manual;
mod metrics;
mod normalizer;
mod ranking;
mod session;
mod table;

use log::info;

pub use crate::columns::compress_columns;
pub use crate::config::*;
pub use crate::metrics::{compute_stats, current_streak, longest_streaks};
pub use crate::normalizer::{active_days, day_denominator, effective_denominator};
pub use crate::ranking::{primary_key, rank_participants};
pub use crate::session::Session;
pub use crate::table::{parse_dataset, parse_table, ParsedRow, ParsedTable};

/// Computes the leaderboard of a dataset for one view.
///
/// This is a pure function of its arguments: the same dataset and view always
/// give the same leaderboard.
pub fn build_leaderboard(dataset: &Dataset, view: &ViewConfig) -> Leaderboard {
    info!(
        "Building leaderboard: {} participants, {} dates, view: {:?}",
        dataset.participants.len(),
        dataset.dates.len(),
        view
    );
    let denominator = effective_denominator(dataset, view);
    let columns = compress_columns(&dataset.dates, &active_days(dataset));

    let mut standings: Vec<Standing> = Vec::with_capacity(dataset.participants.len());
    for (p, score, rank) in rank_participants(&dataset.participants, view) {
        let percent = percentage(score, denominator);
        info!("{:>4} {:>6} {:>4}% {}", rank + 1, score, percent, p.name);
        standings.push(Standing {
            participant: p.clone(),
            rank,
            score,
            percent,
        });
    }

    Leaderboard {
        dates: dataset.dates.clone(),
        denominator,
        columns,
        standings,
    }
}

/// Rounded percentage, with the halves going up.
fn percentage(score: u64, denominator: usize) -> u32 {
    let d = denominator.max(1) as u64;
    let pct = (score.saturating_mul(200) + d) / (2 * d);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(3, 2), 150);
        assert_eq!(percentage(5, 0), 500);
    }
}
