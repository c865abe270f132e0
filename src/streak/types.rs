// src/streak/types.rs
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{QueryError, Result};
use crate::model::Stat;

/// How records are partitioned into players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum GroupKey {
    /// Stable provider id. Two players sharing a name stay apart.
    #[default]
    PlayerId,
    /// Display name. Players sharing a name collapse into one partition.
    PlayerName,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StreakQuery {
    pub statistic: Stat,
    /// A game hits when its value is >= threshold.
    pub threshold: f64,
    /// Shortest run reported. At least 1.
    pub min_length: usize,
    /// Only runs ending on the player's last recorded game.
    pub active_only: bool,
    pub group_by: GroupKey,
    /// Ignore games after this date; "active" is judged as of it.
    pub as_of: Option<NaiveDate>,
}

impl StreakQuery {
    pub fn new(statistic: Stat, threshold: f64) -> Self {
        Self {
            statistic,
            threshold,
            min_length: 1,
            active_only: false,
            group_by: GroupKey::PlayerId,
            as_of: None,
        }
    }

    /// Build from loose user input (statistic by name).
    pub fn parse(statistic: &str, threshold: f64, min_length: usize, active_only: bool) -> Result<Self> {
        let stat: Stat = statistic.parse()?;
        let q = Self::new(stat, threshold)
            .min_length(min_length)
            .active_only(active_only);
        q.validate()?;
        Ok(q)
    }

    pub fn min_length(mut self, n: usize) -> Self { self.min_length = n; self }
    pub fn active_only(mut self, on: bool) -> Self { self.active_only = on; self }
    pub fn group_by(mut self, key: GroupKey) -> Self { self.group_by = key; self }
    pub fn as_of(mut self, date: Option<NaiveDate>) -> Self { self.as_of = date; self }

    pub fn validate(&self) -> Result<()> {
        if self.min_length < 1 {
            return Err(QueryError::MinLength(self.min_length).into());
        }
        if !self.threshold.is_finite() {
            return Err(QueryError::InvalidThreshold(self.threshold).into());
        }
        Ok(())
    }
}

/// One maximal run of hits for one player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Streak {
    pub player_id: u64,
    pub player_name: String,
    pub length: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_value: f64,
    pub wins_in_streak: usize,
}
