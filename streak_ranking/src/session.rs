use log::{debug, info, warn};
use std::collections::HashMap;

use crate::config::*;
use crate::table::parse_dataset;
use crate::build_leaderboard;

// Cache key: the identity of the dataset and the view.
type ViewKey = (String, ViewConfig);

/// Holds the current dataset, and remembers the leaderboards already computed
/// for it.
///
/// Loading a new grid replaces the dataset as a whole. The cache only avoids
/// recomputation: a cached leaderboard is always equal to the one
/// [build_leaderboard] returns for the same dataset and view.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
    cache: HashMap<ViewKey, Leaderboard>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// Parses a grid and makes it the current dataset.
    ///
    /// If the grid cannot be parsed, the session is left without any dataset
    /// and the error is returned.
    pub fn load<S: AsRef<str>>(
        &mut self,
        grid: &[Vec<S>],
        options: &TableOptions,
    ) -> Result<&Dataset, TableError> {
        self.clear();
        match parse_dataset(grid, options) {
            Ok(dataset) => {
                info!(
                    "Session: loaded dataset {} ({} participants)",
                    dataset.fingerprint,
                    dataset.participants.len()
                );
                Ok(&*self.dataset.insert(dataset))
            }
            Err(e) => {
                warn!("Session: failed to load the grid: {}", e);
                Err(e)
            }
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn clear(&mut self) {
        self.dataset = None;
        self.cache.clear();
    }

    /// The leaderboard of the current dataset for this view, if a dataset is
    /// loaded.
    pub fn leaderboard(&mut self, view: &ViewConfig) -> Option<Leaderboard> {
        let dataset = self.dataset.as_ref()?;
        let key: ViewKey = (dataset.fingerprint.clone(), *view);
        if let Some(board) = self.cache.get(&key) {
            debug!("Session: cache hit for {:?}", view);
            return Some(board.clone());
        }
        let board = build_leaderboard(dataset, view);
        self.cache.insert(key, board.clone());
        Some(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<Vec<&'static str>> {
        vec![
            vec!["", "Day1", "Day2", "Day3"],
            vec!["Alice", "✓", "", "✓✓"],
            vec!["Bob", "", "", ""],
        ]
    }

    #[test]
    fn no_dataset_no_leaderboard() {
        let mut s = Session::new();
        assert!(s.dataset().is_none());
        assert!(s.leaderboard(&ViewConfig::DEFAULT_VIEW).is_none());
    }

    #[test]
    fn failed_load_clears_previous_dataset() {
        let mut s = Session::new();
        s.load(&grid(), &TableOptions::default()).unwrap();
        assert!(s.leaderboard(&ViewConfig::DEFAULT_VIEW).is_some());

        let bad = vec![vec!["", "Day1"]];
        assert_eq!(
            s.load(&bad, &TableOptions::default()).err(),
            Some(TableError::EmptyDataset { rows: 1 })
        );
        assert!(s.dataset().is_none());
        assert!(s.leaderboard(&ViewConfig::DEFAULT_VIEW).is_none());
    }

    #[test]
    fn cached_equals_fresh() {
        let mut s = Session::new();
        s.load(&grid(), &TableOptions::default()).unwrap();
        let view = ViewConfig {
            scoring_mode: ScoringMode::Consistency,
            rank_discipline: RankDiscipline::Dense,
            soft_mode: true,
            use_max_streak: false,
        };
        let first = s.leaderboard(&view).unwrap();
        let second = s.leaderboard(&view).unwrap();
        assert_eq!(first, second);
        let fresh = build_leaderboard(s.dataset().unwrap(), &view);
        assert_eq!(first, fresh);
        assert_eq!(first.denominator, 2);
    }

    #[test]
    fn reload_replaces_dataset() {
        let mut s = Session::new();
        s.load(&grid(), &TableOptions::default()).unwrap();
        let before = s.leaderboard(&ViewConfig::DEFAULT_VIEW).unwrap();

        let other = vec![vec!["", "Mon"], vec!["Cleo", "✓"]];
        s.load(&other, &TableOptions::default()).unwrap();
        let after = s.leaderboard(&ViewConfig::DEFAULT_VIEW).unwrap();
        assert_ne!(before, after);
        assert_eq!(after.standings.len(), 1);
        assert_eq!(after.standings[0].participant.name, "Cleo");
    }
}
