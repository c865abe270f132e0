// src/query/versus.rs
use serde::Serialize;

use crate::error::{QueryError, Result};
use crate::model::Stat;
use crate::store::RecordRelation;

use super::mean_of;

pub const VERSUS_STATS: [Stat; 4] = [
    Stat::Points,
    Stat::Rebounds,
    Stat::Assists,
    Stat::TrueShootingPct,
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VersusSide {
    pub player_id: u64,
    pub player_name: String,
    pub games: usize,
    /// Means, in `VERSUS_STATS` order.
    pub means: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeadToHead {
    pub stats: Vec<Stat>,
    pub left: VersusSide,
    pub right: VersusSide,
}

impl HeadToHead {
    /// (stat, left mean, right mean) rows.
    pub fn rows(&self) -> impl Iterator<Item = (Stat, f64, f64)> + '_ {
        self.stats
            .iter()
            .zip(self.left.means.iter().zip(&self.right.means))
            .map(|(s, (l, r))| (*s, *l, *r))
    }
}

fn side(rel: &RecordRelation, player_id: u64) -> Result<VersusSide> {
    let games = rel.player_records(player_id);
    let Some(latest) = games.iter().max_by_key(|g| g.game_date) else {
        return Err(QueryError::UnknownPlayer(player_id.to_string()).into());
    };
    Ok(VersusSide {
        player_id,
        player_name: latest.player_name.clone(),
        games: games.len(),
        means: VERSUS_STATS.iter().map(|s| mean_of(&games, *s)).collect(),
    })
}

/// Career means of two players side by side.
pub fn head_to_head(rel: &RecordRelation, left: u64, right: u64) -> Result<HeadToHead> {
    Ok(HeadToHead {
        stats: VERSUS_STATS.to_vec(),
        left: side(rel, left)?,
        right: side(rel, right)?,
    })
}
