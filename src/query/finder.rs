// src/query/finder.rs
use crate::config::consts::{FINDER_LIMIT, FINDER_MIN_PTS};
use crate::model::{GameRecord, Stat};
use crate::store::RecordRelation;

/// Game finder: single-game performances passing every minimum.
#[derive(Clone, Debug, PartialEq)]
pub struct FinderQuery {
    /// Team abbreviations; empty means any team.
    pub teams: Vec<String>,
    /// Inclusive per-stat floors.
    pub minimums: Vec<(Stat, f64)>,
    /// Result ordering key (descending).
    pub sort_by: Stat,
    pub limit: usize,
}

impl Default for FinderQuery {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            minimums: vec![
                (Stat::Points, FINDER_MIN_PTS),
                (Stat::Assists, 0.0),
                (Stat::Rebounds, 0.0),
            ],
            sort_by: Stat::Points,
            limit: FINDER_LIMIT,
        }
    }
}

impl FinderQuery {
    /// Set (or add) the floor for one stat.
    pub fn with_min(mut self, stat: Stat, min: f64) -> Self {
        match self.minimums.iter_mut().find(|(s, _)| *s == stat) {
            Some(slot) => slot.1 = min,
            None => self.minimums.push((stat, min)),
        }
        self
    }

    pub fn min_for(&self, stat: Stat) -> f64 {
        self.minimums.iter().find(|(s, _)| *s == stat).map(|(_, v)| *v).unwrap_or(0.0)
    }

    fn keeps(&self, r: &GameRecord) -> bool {
        let team_ok = self.teams.is_empty() || self.teams.iter().any(|t| *t == r.team);
        team_ok && self.minimums.iter().all(|&(s, min)| r.stat(s) >= min)
    }
}

/// Matching games, best `sort_by` first; ties keep relation order.
pub fn find_games<'a>(rel: &'a RecordRelation, q: &FinderQuery) -> Vec<&'a GameRecord> {
    let mut hits: Vec<&GameRecord> = rel.iter().filter(|r| q.keeps(r)).collect();
    hits.sort_by(|a, b| b.stat(q.sort_by).total_cmp(&a.stat(q.sort_by)));
    hits.truncate(q.limit);
    hits
}
