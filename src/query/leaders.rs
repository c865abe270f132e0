// src/query/leaders.rs
use std::collections::HashMap;

use serde::Serialize;

use crate::config::consts::LEADERBOARD_SIZE;
use crate::error::{QueryError, Result};
use crate::model::Stat;
use crate::store::RecordRelation;

/// Players ranked by how often they reached a threshold.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderRow {
    pub player_id: u64,
    pub player_name: String,
    pub hits: usize,
}

pub fn hit_leaders(rel: &RecordRelation, stat: Stat, threshold: f64) -> Result<Vec<LeaderRow>> {
    hit_leaders_top(rel, stat, threshold, LEADERBOARD_SIZE)
}

/// Count of games with `stat >= threshold` per player, most first.
/// Ties go by name ascending. Players with no hits are left out.
pub fn hit_leaders_top(
    rel: &RecordRelation,
    stat: Stat,
    threshold: f64,
    limit: usize,
) -> Result<Vec<LeaderRow>> {
    if !threshold.is_finite() {
        return Err(QueryError::InvalidThreshold(threshold).into());
    }

    let mut counts: HashMap<u64, usize> = HashMap::new();
    for r in rel.iter().filter(|r| r.stat(stat) >= threshold) {
        *counts.entry(r.player_id).or_default() += 1;
    }

    let mut rows: Vec<LeaderRow> = rel
        .players()
        .into_iter()
        .filter_map(|(id, name)| {
            counts.get(&id).map(|&hits| LeaderRow { player_id: id, player_name: name, hits })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.hits
            .cmp(&a.hits)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then(a.player_id.cmp(&b.player_id))
    });
    rows.truncate(limit);
    Ok(rows)
}
