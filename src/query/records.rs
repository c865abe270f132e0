// src/query/records.rs
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::consts::TOP_PERFORMANCES;
use crate::model::{GameRecord, Stat};
use crate::store::RecordRelation;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordMark {
    pub stat: Stat,
    pub value: f64,
    pub player_id: u64,
    pub player_name: String,
    pub opponent: String,
    pub game_date: NaiveDate,
}

impl RecordMark {
    fn of(r: &GameRecord, stat: Stat) -> Self {
        Self {
            stat,
            value: r.stat(stat),
            player_id: r.player_id,
            player_name: r.player_name.clone(),
            opponent: r.opponent.clone(),
            game_date: r.game_date,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RecordBook {
    pub most_points: Option<RecordMark>,
    pub most_assists: Option<RecordMark>,
    pub best_game_score: Option<RecordMark>,
    /// Best single games by game score.
    pub top_performances: Vec<GameRecord>,
}

impl RecordBook {
    pub fn marks(&self) -> impl Iterator<Item = &RecordMark> {
        [&self.most_points, &self.most_assists, &self.best_game_score]
            .into_iter()
            .flatten()
    }
}

/// Highest single-game value; the earliest record wins ties.
pub fn best_by(rel: &RecordRelation, stat: Stat) -> Option<&GameRecord> {
    rel.iter().fold(None, |best: Option<&GameRecord>, r| match best {
        Some(b) if b.stat(stat) >= r.stat(stat) => Some(b),
        _ => Some(r),
    })
}

pub fn record_book(rel: &RecordRelation) -> RecordBook {
    let mut top: Vec<&GameRecord> = rel.iter().collect();
    top.sort_by(|a, b| b.stat(Stat::GameScore).total_cmp(&a.stat(Stat::GameScore)));
    top.truncate(TOP_PERFORMANCES);

    RecordBook {
        most_points: best_by(rel, Stat::Points).map(|r| RecordMark::of(r, Stat::Points)),
        most_assists: best_by(rel, Stat::Assists).map(|r| RecordMark::of(r, Stat::Assists)),
        best_game_score: best_by(rel, Stat::GameScore).map(|r| RecordMark::of(r, Stat::GameScore)),
        top_performances: top.into_iter().cloned().collect(),
    }
}
