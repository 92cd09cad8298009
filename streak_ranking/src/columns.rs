use log::debug;

use crate::config::Column;

/// Builds the compact layout of the day columns.
///
/// Every active day keeps its column. A run of inactive days, however long,
/// is replaced by a single break, except at the end of the table where it is
/// dropped.
pub fn compress_columns(dates: &[String], active: &[bool]) -> Vec<Column> {
    let mut res: Vec<Column> = Vec::new();
    let mut pending_break = false;
    for (index, label) in dates.iter().enumerate() {
        if active.get(index).cloned().unwrap_or(false) {
            if pending_break {
                res.push(Column::Break);
                pending_break = false;
            }
            res.push(Column::Day {
                index,
                label: label.clone(),
            });
        } else {
            pending_break = true;
        }
    }
    if pending_break {
        debug!("compress_columns: dropping trailing inactive days");
    }
    debug!(
        "compress_columns: {} dates -> {} columns",
        dates.len(),
        res.len()
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("D{}", i)).collect()
    }

    fn day(index: usize) -> Column {
        Column::Day {
            index,
            label: format!("D{}", index + 1),
        }
    }

    #[test]
    fn example_layout() {
        let cols = compress_columns(&labels(3), &[true, false, true]);
        assert_eq!(cols, vec![day(0), Column::Break, day(2)]);
    }

    #[test]
    fn one_break_per_run() {
        let cols = compress_columns(
            &labels(7),
            &[false, false, true, false, false, false, true],
        );
        assert_eq!(cols, vec![Column::Break, day(2), Column::Break, day(6)]);
    }

    #[test]
    fn trailing_run_dropped() {
        let cols = compress_columns(&labels(4), &[true, true, false, false]);
        assert_eq!(cols, vec![day(0), day(1)]);

        let nothing = compress_columns(&labels(3), &[false, false, false]);
        assert!(nothing.is_empty());
    }

    #[test]
    fn no_adjacent_or_trailing_breaks() {
        let patterns: Vec<Vec<bool>> = (0u32..64)
            .map(|bits| (0..6).map(|i| bits & (1 << i) != 0).collect())
            .collect();
        for active in patterns.iter() {
            let cols = compress_columns(&labels(6), active);
            for w in cols.windows(2) {
                assert!(!(w[0] == Column::Break && w[1] == Column::Break));
            }
            assert_ne!(cols.last(), Some(&Column::Break));
            let kept = cols.iter().filter(|c| **c != Column::Break).count();
            assert_eq!(kept, active.iter().filter(|a| **a).count());
        }
    }
}
