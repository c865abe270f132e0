// tests/streaks.rs
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use statpulse::error::{QueryError, StatError};
use statpulse::model::{GameRecord, Location, Stat, StatLine, WinLoss};
use statpulse::streak::{find_streaks, GroupKey, Streak, StreakQuery};

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 1).unwrap() + Duration::days(n - 1)
}

fn game(id: u64, name: &str, n: i64, pts: f64, win: bool) -> GameRecord {
    let mut stats = StatLine::default();
    stats.set(Stat::Points, pts);
    GameRecord {
        season_id: "2024-25".into(),
        player_id: id,
        player_name: name.into(),
        team: "AAA".into(),
        game_date: day(n),
        matchup: "AAA vs. BBB".into(),
        location: Location::Home,
        opponent: "BBB".into(),
        win_loss: if win { WinLoss::Win } else { WinLoss::Loss },
        stats,
    }
}

/// Player "A": PTS [35, 28, 31, 40, 20, 33] on days 1..6.
fn player_a() -> Vec<GameRecord> {
    [35.0, 28.0, 31.0, 40.0, 20.0, 33.0]
        .iter()
        .enumerate()
        .map(|(i, &p)| game(1, "A", i as i64 + 1, p, i % 2 == 0))
        .collect()
}

fn pts(threshold: f64) -> StreakQuery {
    StreakQuery::new(Stat::Points, threshold)
}

fn spans(out: &[Streak]) -> Vec<(usize, NaiveDate, NaiveDate, f64)> {
    out.iter().map(|s| (s.length, s.start_date, s.end_date, s.average_value)).collect()
}

/* ---------------- Scenarios ---------------- */

#[test]
fn single_qualifying_run() {
    let out = find_streaks(&player_a(), &pts(30.0).min_length(2)).unwrap();
    assert_eq!(spans(&out), vec![(2, day(3), day(4), 35.5)]);
    assert_eq!(out[0].player_name, "A");
}

#[test]
fn active_only_drops_runs_that_ended() {
    let out = find_streaks(&player_a(), &pts(30.0).min_length(2).active_only(true)).unwrap();
    assert!(out.is_empty());
}

#[test]
fn length_one_runs_sorted_by_length_then_average() {
    let out = find_streaks(&player_a(), &pts(30.0).min_length(1)).unwrap();
    assert_eq!(
        spans(&out),
        vec![
            (2, day(3), day(4), 35.5),
            (1, day(1), day(1), 35.0),
            (1, day(6), day(6), 33.0),
        ]
    );
}

#[test]
fn empty_relation_is_not_an_error() {
    assert!(find_streaks(&[], &pts(30.0)).unwrap().is_empty());
}

#[test]
fn zero_min_length_is_rejected() {
    let err = find_streaks(&player_a(), &pts(30.0).min_length(0)).unwrap_err();
    assert!(matches!(err, StatError::InvalidQuery(QueryError::MinLength(0))));
}

#[test]
fn players_without_hits_are_absent() {
    let mut recs = player_a();
    recs.extend((1..=6).map(|n| game(2, "B", n, 10.0, true)));
    let out = find_streaks(&recs, &pts(30.0).min_length(1)).unwrap();
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|s| s.player_id == 1));
}

#[test]
fn unknown_statistic_is_rejected() {
    let err = StreakQuery::parse("dunks", 1.0, 1, false).unwrap_err();
    assert!(matches!(err, StatError::InvalidQuery(QueryError::UnknownStatistic(_))));
    assert!(StreakQuery::parse("points", 30.0, 2, true).is_ok());
}

#[test]
fn wins_and_average_are_run_local() {
    let out = find_streaks(&player_a(), &pts(30.0).min_length(2)).unwrap();
    // Day 3 is a win (even index), day 4 a loss.
    assert_eq!(out[0].wins_in_streak, 1);
    assert_eq!(out[0].average_value, (31.0 + 40.0) / 2.0);
}

/* ---------------- Properties ---------------- */

/// Several players, interleaved, with shuffled dates, rest days and repeated values.
fn random_relation(seed: u64) -> Vec<GameRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut recs = Vec::new();
    for id in 1..=6u64 {
        let games = rng.gen_range(1..=30);
        let mut n = 0i64;
        for _ in 0..games {
            n += rng.gen_range(1..=4);
            let p = (rng.gen_range(0..8) * 5) as f64; // 0..35 in steps of 5
            recs.push(game(id, &format!("P{id}"), n, p, rng.gen_bool(0.5)));
        }
    }
    recs.shuffle(&mut rng);
    recs
}

fn history(recs: &[GameRecord], id: u64) -> Vec<(NaiveDate, f64)> {
    let mut h: Vec<(NaiveDate, f64)> = recs
        .iter()
        .filter(|r| r.player_id == id)
        .map(|r| (r.game_date, r.stat(Stat::Points)))
        .collect();
    h.sort_by_key(|(d, _)| *d);
    h
}

fn check_properties(recs: &[GameRecord], q: &StreakQuery) {
    let out = find_streaks(recs, q).unwrap();

    for s in &out {
        let h = history(recs, s.player_id);
        let start = h.iter().position(|(d, _)| *d == s.start_date).unwrap();
        let end = h.iter().position(|(d, _)| *d == s.end_date).unwrap();

        // Every game inside is a hit (P3: inclusive) and the count matches.
        assert_eq!(end - start + 1, s.length);
        assert!(h[start..=end].iter().all(|(_, v)| *v >= q.threshold));

        // P1: maximal on both sides.
        assert!(start == 0 || h[start - 1].1 < q.threshold);
        assert!(end + 1 == h.len() || h[end + 1].1 < q.threshold);

        // P4
        assert!(s.length >= q.min_length);

        // P5
        if q.active_only {
            assert_eq!(Some(s.end_date), h.last().map(|(d, _)| *d));
        }
    }

    // P2: per player, runs don't overlap and have a gap between them.
    for id in 1..=6u64 {
        let mut mine: Vec<&Streak> = out.iter().filter(|s| s.player_id == id).collect();
        mine.sort_by_key(|s| s.start_date);
        for w in mine.windows(2) {
            assert!(w[0].end_date < w[1].start_date);
            let h = history(recs, id);
            let gap = h.iter().filter(|(d, _)| *d > w[0].end_date && *d < w[1].start_date).count();
            assert!(gap >= 1);
        }
    }

    // P6
    for w in out.windows(2) {
        assert!(
            w[0].length > w[1].length
                || (w[0].length == w[1].length && w[0].average_value >= w[1].average_value)
        );
    }

    // P7
    assert_eq!(find_streaks(recs, q).unwrap(), out);
}

#[test]
fn properties_hold_over_generated_relations() {
    for seed in 0..40u64 {
        let recs = random_relation(seed);
        for threshold in [0.0, 15.0, 20.0, 35.0] {
            for min_length in [1, 2, 4] {
                for active in [false, true] {
                    let q = pts(threshold).min_length(min_length).active_only(active);
                    check_properties(&recs, &q);
                }
            }
        }
    }
}

#[test]
fn exact_threshold_counts_as_hit() {
    let recs = vec![game(1, "A", 1, 30.0, true), game(1, "A", 2, 30.0, true)];
    let out = find_streaks(&recs, &pts(30.0).min_length(2)).unwrap();
    assert_eq!(out.len(), 1);
}

#[test]
fn rest_days_do_not_break_a_streak() {
    // Oct 1, Oct 5, Oct 20: consecutive games, not consecutive days.
    let recs = vec![
        game(1, "A", 20, 33.0, true),
        game(1, "A", 1, 31.0, true),
        game(1, "A", 5, 30.0, false),
    ];
    let out = find_streaks(&recs, &pts(30.0).min_length(3)).unwrap();
    assert_eq!(spans(&out), vec![(3, day(1), day(20), 94.0 / 3.0)]);
    assert_eq!(out[0].wins_in_streak, 2);
}

#[test]
fn id_and_name_grouping_differ_only_on_shared_names() {
    let recs = random_relation(7);
    let by_id = find_streaks(&recs, &pts(20.0)).unwrap();
    let by_name = find_streaks(&recs, &pts(20.0).group_by(GroupKey::PlayerName)).unwrap();
    // Names are unique per id here, so both groupings agree.
    assert_eq!(spans(&by_id), spans(&by_name));
}
