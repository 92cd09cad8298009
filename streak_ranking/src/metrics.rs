use log::debug;
use std::collections::BTreeSet;

use crate::config::Stats;

/// Computes all the statistics of one history of completion counts.
pub fn compute_stats(history: &[u32]) -> Stats {
    let points: u64 = history.iter().map(|c| *c as u64).sum();
    let consistency_days = history.iter().filter(|c| **c > 0).count();
    let current_streak = current_streak(history);
    let (max_streak, max_streak_days) = longest_streaks(history);
    let stats = Stats {
        points,
        consistency_days,
        current_streak,
        max_streak,
        max_streak_days,
    };
    debug!("compute_stats: {:?} -> {:?}", history, stats);
    stats
}

/// The number of active days at the end of the history.
pub fn current_streak(history: &[u32]) -> usize {
    history.iter().rev().take_while(|c| **c > 0).count()
}

/// The length of the longest run of active days, and the days of all the runs
/// that reach this length.
///
/// When several runs are tied for the longest, all of them are reported.
pub fn longest_streaks(history: &[u32]) -> (usize, BTreeSet<usize>) {
    let mut best_len: usize = 0;
    let mut best_days: BTreeSet<usize> = BTreeSet::new();
    // Start of the current run, if the previous day was active.
    let mut run_start: Option<usize> = None;

    // One extra step past the end to close the last run.
    for idx in 0..=history.len() {
        let active = history.get(idx).map_or(false, |c| *c > 0);
        match (active, run_start) {
            (true, None) => {
                run_start = Some(idx);
            }
            (true, Some(_)) => {}
            (false, Some(start)) => {
                let len = idx - start;
                if len > best_len {
                    best_len = len;
                    best_days = (start..idx).collect();
                } else if len == best_len && best_len > 0 {
                    best_days.extend(start..idx);
                }
                run_start = None;
            }
            (false, None) => {}
        }
    }
    (best_len, best_days)
}
