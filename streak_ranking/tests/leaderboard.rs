use std::collections::BTreeSet;

use streak_ranking::builder::Builder;
use streak_ranking::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn example_grid() -> Vec<Vec<&'static str>> {
    vec![
        vec!["", "Day1", "Day2", "Day3"],
        vec!["Alice", "✓", "", "✓✓"],
        vec!["Bob", "", "", ""],
        vec!["", "✓", "✓", "✓"],
    ]
}

// A few histories with ties, dead days and multi-mark days.
fn sample_dataset() -> Dataset {
    let dates: Vec<String> = (1..=8).map(|d| format!("2024-03-0{}", d)).collect();
    let mut b = Builder::new(&dates);
    b.add_marks("Ann", &[1, 1, 0, 0, 1, 1, 0, 1]);
    b.add_marks("Ben", &[2, 0, 0, 0, 2, 0, 0, 2]);
    b.add_marks("Cid", &[1, 1, 0, 0, 1, 1, 0, 1]);
    b.add_marks("Dot", &[0, 0, 0, 0, 0, 0, 0, 0]);
    b.add_marks("Eve", &[1, 1, 0, 0, 1, 1, 0, 0]);
    b.add_marks("Fay", &[3, 1, 0, 0, 0, 1, 0, 1]);
    b.dataset(&TableOptions::default()).unwrap()
}

fn all_views() -> Vec<ViewConfig> {
    let mut res = Vec::new();
    for scoring_mode in [ScoringMode::Points, ScoringMode::Consistency, ScoringMode::Streak] {
        for rank_discipline in [RankDiscipline::Dense, RankDiscipline::Competition] {
            for soft_mode in [false, true] {
                for use_max_streak in [false, true] {
                    res.push(ViewConfig {
                        scoring_mode,
                        rank_discipline,
                        soft_mode,
                        use_max_streak,
                    });
                }
            }
        }
    }
    res
}

#[test]
fn example_dataset() {
    init();
    let dataset = parse_dataset(&example_grid(), &TableOptions::default()).unwrap();
    assert_eq!(dataset.dates, vec!["Day1", "Day2", "Day3"]);
    assert_eq!(dataset.participants.len(), 2);

    let alice = &dataset.participants[0];
    assert_eq!(alice.id, 1);
    assert_eq!(alice.history, vec![1, 0, 2]);
    assert_eq!(alice.stats.points, 3);
    assert_eq!(alice.stats.consistency_days, 2);
    assert_eq!(alice.stats.current_streak, 1);
    assert_eq!(alice.stats.max_streak, 1);
    assert_eq!(
        alice.stats.max_streak_days,
        [0, 2].iter().cloned().collect::<BTreeSet<usize>>()
    );

    let bob = &dataset.participants[1];
    assert_eq!(bob.history, vec![0, 0, 0]);
    assert_eq!(bob.stats, Stats::default());

    let board = build_leaderboard(&dataset, &ViewConfig::DEFAULT_VIEW);
    let ranks: Vec<(&str, usize)> = board
        .standings
        .iter()
        .map(|s| (s.participant.name.as_str(), s.rank))
        .collect();
    assert_eq!(ranks, vec![("Alice", 0), ("Bob", 1)]);
    assert_eq!(board.standings[0].percent, 100);
    assert_eq!(board.standings[0].podium(), Some(Podium::Gold));
    assert_eq!(board.standings[1].podium(), Some(Podium::Silver));

    assert_eq!(day_denominator(&dataset, true), 2);
    assert_eq!(
        board.columns,
        vec![
            Column::Day {
                index: 0,
                label: "Day1".to_string()
            },
            Column::Break,
            Column::Day {
                index: 2,
                label: "Day3".to_string()
            },
        ]
    );
}

#[test]
fn stats_match_histories() {
    init();
    let dataset = sample_dataset();
    for p in dataset.participants.iter() {
        assert_eq!(p.history.len(), dataset.dates.len());
        assert_eq!(
            p.stats.points,
            p.history.iter().map(|c| *c as u64).sum::<u64>()
        );
        assert_eq!(
            p.stats.consistency_days,
            p.history.iter().filter(|c| **c > 0).count()
        );
        assert_eq!(p.stats.max_streak_days.len() % p.stats.max_streak.max(1), 0);
        for day in p.stats.max_streak_days.iter() {
            assert!(p.history[*day] > 0);
        }
    }
    let fay = &dataset.participants[5];
    assert_eq!(fay.stats.max_streak, 2);
    assert_eq!(fay.stats.current_streak, 1);
    assert_eq!(fay.stats.max_streak_days.len(), 2);
    let eve = &dataset.participants[4];
    assert_eq!(eve.stats.current_streak, 0);
    assert_eq!(eve.stats.max_streak_days.len(), 4);
}

#[test]
fn rank_disciplines_on_every_view() {
    init();
    let dataset = sample_dataset();
    for view in all_views() {
        let board = build_leaderboard(&dataset, &view);
        assert_eq!(board.standings.len(), dataset.participants.len());
        for w in board.standings.windows(2) {
            assert!(w[0].score >= w[1].score, "{:?}", view);
            match view.rank_discipline {
                RankDiscipline::Competition => assert_eq!(w[1].rank, w[0].rank + 1),
                RankDiscipline::Dense if w[0].score == w[1].score => {
                    assert_eq!(w[1].rank, w[0].rank)
                }
                RankDiscipline::Dense => assert_eq!(w[1].rank, w[0].rank + 1),
            }
        }
        assert_eq!(board.standings[0].rank, 0);
    }
}

#[test]
fn soft_denominator_bounds() {
    init();
    let dataset = sample_dataset();
    let hard = day_denominator(&dataset, false);
    let soft = day_denominator(&dataset, true);
    assert_eq!(hard, 8);
    assert_eq!(soft, 5);
    assert!(soft <= hard && soft >= 1);

    let view = ViewConfig {
        scoring_mode: ScoringMode::Consistency,
        rank_discipline: RankDiscipline::Dense,
        soft_mode: true,
        use_max_streak: false,
    };
    let board = build_leaderboard(&dataset, &view);
    assert_eq!(board.denominator, 5);
    // Ann and Cid are active on all the 5 live days.
    assert_eq!(board.standings[0].percent, 100);
}

#[test]
fn consistency_order_on_sample() {
    init();
    let dataset = sample_dataset();
    let view = ViewConfig {
        scoring_mode: ScoringMode::Consistency,
        rank_discipline: RankDiscipline::Dense,
        ..ViewConfig::DEFAULT_VIEW
    };
    let board = build_leaderboard(&dataset, &view);
    let order: Vec<(&str, u64, usize)> = board
        .standings
        .iter()
        .map(|s| (s.participant.name.as_str(), s.score, s.rank))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Ann", 5, 0),
            ("Cid", 5, 0),
            ("Fay", 4, 1),
            ("Eve", 4, 1),
            ("Ben", 3, 2),
            ("Dot", 0, 3),
        ]
    );
}

#[test]
fn streak_order_on_sample() {
    init();
    let dataset = sample_dataset();
    let view = ViewConfig {
        scoring_mode: ScoringMode::Streak,
        rank_discipline: RankDiscipline::Competition,
        use_max_streak: true,
        soft_mode: false,
    };
    let board = build_leaderboard(&dataset, &view);
    let order: Vec<(&str, u64)> = board
        .standings
        .iter()
        .map(|s| (s.participant.name.as_str(), s.score))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Fay", 2),
            ("Ann", 2),
            ("Cid", 2),
            ("Eve", 2),
            ("Ben", 1),
            ("Dot", 0),
        ]
    );
    assert_eq!(board.standings[3].podium(), None);
}

#[test]
fn failed_parse_leaves_nothing() {
    init();
    let mut session = Session::new();
    session
        .load(&example_grid(), &TableOptions::default())
        .unwrap();
    let header_only = vec![vec!["", "Day1", "Day2"]];
    assert!(session
        .load(&header_only, &TableOptions::default())
        .is_err());
    assert!(session.dataset().is_none());
}
