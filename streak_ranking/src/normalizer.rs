// Denominators for the percentages.

use log::debug;

use crate::config::*;

/// For every date, whether at least one participant was active on that day.
pub fn active_days(dataset: &Dataset) -> Vec<bool> {
    (0..dataset.dates.len())
        .map(|day| dataset.participants.iter().any(|p| p.is_active(day)))
        .collect()
}

/// The number of days the percentages are computed against.
///
/// Without soft mode, this is the number of dates. With soft mode, the days on
/// which nobody was active are not counted. It is never less than 1.
pub fn day_denominator(dataset: &Dataset, soft_mode: bool) -> usize {
    let days = if soft_mode {
        active_days(dataset).iter().filter(|a| **a).count()
    } else {
        dataset.dates.len()
    };
    debug!(
        "day_denominator: soft_mode: {:?} days: {:?}",
        soft_mode, days
    );
    days.max(1)
}

/// The denominator for a view. Soft mode only applies to the consistency and
/// streak modes.
pub fn effective_denominator(dataset: &Dataset, view: &ViewConfig) -> usize {
    let soft = view.soft_mode
        && matches!(
            view.scoring_mode,
            ScoringMode::Consistency | ScoringMode::Streak
        );
    day_denominator(dataset, soft)
}
