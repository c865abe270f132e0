// src/query/mod.rs
//! Dashboard views. Each is a pure function of a `RecordRelation`
//! and its parameters; nothing is cached between calls.

mod finder;
mod leaders;
mod profile;
mod records;
mod versus;

pub use finder::{find_games, FinderQuery};
pub use leaders::{hit_leaders, hit_leaders_top, LeaderRow};
pub use profile::{headshot_url, player_profile, team_logo_url, PlayerProfile, SeasonSplit, TrendPoint};
pub use records::{best_by, record_book, RecordBook, RecordMark};
pub use versus::{head_to_head, HeadToHead, VersusSide, VERSUS_STATS};

use crate::model::{GameRecord, Stat};

/// Arithmetic mean of `stat`; 0 for no games.
pub(crate) fn mean_of(games: &[&GameRecord], stat: Stat) -> f64 {
    if games.is_empty() {
        return 0.0;
    }
    games.iter().map(|g| g.stat(stat)).sum::<f64>() / games.len() as f64
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::{QueryError, StatError};
    use crate::model::{Location, StatLine, WinLoss};
    use crate::store::RecordRelation;

    fn rec(id: u64, name: &str, team: &str, date: (i32, u32, u32), line: StatLine) -> GameRecord {
        let game_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        GameRecord {
            season_id: crate::ingest::season_for_date(game_date),
            player_id: id,
            player_name: s!(name),
            team: s!(team),
            game_date,
            matchup: format!("{team} @ OPP"),
            location: Location::Away,
            opponent: s!("OPP"),
            win_loss: WinLoss::Win,
            stats: line,
        }
    }

    fn sample() -> RecordRelation {
        RecordRelation::new(vec![
            rec(1, "Luka", "DAL", (2024, 3, 1), stat_line![Points => 40, Assists => 10, Rebounds => 8, GameScore => 35.0]),
            rec(2, "Jokic", "DEN", (2024, 3, 1), stat_line![Points => 28, Assists => 14, Rebounds => 15, GameScore => 35.0]),
            rec(1, "Luka", "DAL", (2024, 11, 2), stat_line![Points => 20, Assists => 6, Rebounds => 4, GameScore => 14.0]),
            rec(2, "Jokic", "DEN", (2024, 11, 2), stat_line![Points => 33, Assists => 9, Rebounds => 12, GameScore => 30.0]),
            rec(1, "Luka", "LAL", (2025, 2, 10), stat_line![Points => 30, Assists => 8, Rebounds => 9, GameScore => 25.0]),
        ])
    }

    #[test]
    fn finder_applies_minimums_and_teams() {
        let rel = sample();
        let hits = find_games(&rel, &FinderQuery::default());
        let pts: Vec<f64> = hits.iter().map(|r| r.stat(Stat::Points)).collect();
        assert_eq!(pts, vec![40.0, 33.0, 30.0]);

        let q = FinderQuery { teams: vec![s!("DEN")], ..FinderQuery::default() }
            .with_min(Stat::Assists, 10.0);
        assert!(find_games(&rel, &q).is_empty());

        let q = FinderQuery::default().with_min(Stat::Points, 0.0).with_min(Stat::Rebounds, 12.0);
        assert_eq!(q.min_for(Stat::Rebounds), 12.0);
        assert_eq!(find_games(&rel, &q).len(), 2);
    }

    #[test]
    fn profile_summarises_one_player() {
        let p = player_profile(&sample(), 1).unwrap();
        assert_eq!(p.player_name, "Luka");
        assert_eq!(p.team, "LAL");
        assert_eq!(p.games, 3);
        assert_eq!(p.avg_points, 30.0);
        assert_eq!(p.best_game_score, 35.0);
        let seasons: Vec<&str> = p.seasons.iter().map(|s| s.season_id.as_str()).collect();
        assert_eq!(seasons, vec!["2024-25", "2023-24"]);
        assert_eq!(p.seasons[0].games, 2);
        assert_eq!(p.seasons[0].points, 25.0);
        assert_eq!(p.last_games[0].game_date, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
        assert_eq!(p.trend.first().map(|t| t.points), Some(40.0));
        assert!(p.headshot_url.ends_with("/1.png"));
    }

    #[test]
    fn unknown_player_is_rejected() {
        match player_profile(&sample(), 99) {
            Err(StatError::InvalidQuery(QueryError::UnknownPlayer(id))) => assert_eq!(id, "99"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(head_to_head(&sample(), 1, 99).is_err());
    }

    #[test]
    fn head_to_head_means() {
        let h = head_to_head(&sample(), 1, 2).unwrap();
        let rows: Vec<(Stat, f64, f64)> = h.rows().collect();
        assert_eq!(rows[0], (Stat::Points, 30.0, 30.5));
        assert_eq!(rows[2], (Stat::Assists, 8.0, 11.5));
        assert_eq!(h.right.games, 2);
    }

    #[test]
    fn leaderboard_counts_and_breaks_ties_by_name() {
        let rel = sample();
        let rows = hit_leaders(&rel, Stat::Points, 28.0).unwrap();
        assert_eq!(
            rows.iter().map(|r| (r.player_name.as_str(), r.hits)).collect::<Vec<_>>(),
            vec![("Jokic", 2), ("Luka", 2)]
        );
        assert!(hit_leaders(&rel, Stat::Points, 100.0).unwrap().is_empty());
        assert!(hit_leaders(&rel, Stat::Points, f64::INFINITY).is_err());
    }

    #[test]
    fn record_book_first_occurrence_wins() {
        let book = record_book(&sample());
        let pts = book.most_points.as_ref().unwrap();
        assert_eq!((pts.player_name.as_str(), pts.value), ("Luka", 40.0));
        assert_eq!(book.most_assists.as_ref().unwrap().player_name, "Jokic");
        // Both 35.0; Luka's row comes first.
        assert_eq!(book.best_game_score.as_ref().unwrap().player_id, 1);
        assert_eq!(book.top_performances.len(), 5);
        assert_eq!(book.marks().count(), 3);

        let empty = record_book(&RecordRelation::empty());
        assert_eq!(empty, RecordBook::default());
    }
}
