use log::debug;
use std::cmp::Ordering;

use crate::config::*;

/// The value a participant is ranked on in the given view.
pub fn primary_key(stats: &Stats, view: &ViewConfig) -> u64 {
    match view.scoring_mode {
        ScoringMode::Points => stats.points,
        ScoringMode::Consistency => stats.consistency_days as u64,
        ScoringMode::Streak if view.use_max_streak => stats.max_streak as u64,
        ScoringMode::Streak => stats.current_streak as u64,
    }
}

// Only used to break ties on the primary key.
fn secondary_key(stats: &Stats, mode: ScoringMode) -> u64 {
    match mode {
        ScoringMode::Points => stats.consistency_days as u64,
        ScoringMode::Consistency | ScoringMode::Streak => stats.points,
    }
}

/// Sorts the participants from best to worst and assigns them a rank.
///
/// Participants are compared on their primary key, then on the secondary key
/// of the mode. Participants that are still equal keep their input order.
///
/// Returns the participants in order with their primary key and their rank.
pub fn rank_participants<'a>(
    participants: &'a [Participant],
    view: &ViewConfig,
) -> Vec<(&'a Participant, u64, usize)> {
    let mut sorted: Vec<(&Participant, u64, u64)> = participants
        .iter()
        .map(|p| {
            (
                p,
                primary_key(&p.stats, view),
                secondary_key(&p.stats, view.scoring_mode),
            )
        })
        .collect();
    // sort_by is stable.
    sorted.sort_by(|(_, pa, sa), (_, pb, sb)| match pb.cmp(pa) {
        Ordering::Equal => sb.cmp(sa),
        o => o,
    });

    let mut res: Vec<(&Participant, u64, usize)> = Vec::with_capacity(sorted.len());
    // The dense rank grows every time the primary key changes, since the keys
    // are visited in decreasing order.
    let mut dense_rank: usize = 0;
    for (idx, (p, key, _)) in sorted.iter().enumerate() {
        if idx > 0 && sorted[idx - 1].1 != *key {
            dense_rank += 1;
        }
        let rank = match view.rank_discipline {
            RankDiscipline::Competition => idx,
            RankDiscipline::Dense => dense_rank,
        };
        debug!(
            "rank_participants: {} {:?} key: {} rank: {}",
            p.id, p.name, key, rank
        );
        res.push((*p, *key, rank));
    }
    res
}

impl Podium {
    pub fn for_rank(rank: usize) -> Option<Podium> {
        match rank {
            0 => Some(Podium::Gold),
            1 => Some(Podium::Silver),
            2 => Some(Podium::Bronze),
            _ => None,
        }
    }
}
