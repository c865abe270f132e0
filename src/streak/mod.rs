// src/streak/mod.rs
//! Streak detection over the record relation.
//!
//! A streak is a maximal run of a player's games, taken in date order, in
//! which one statistic stays at or above a threshold. Adjacency is by games
//! played: a rest day between two games does not break a run.
//!
//! The engine is a pure function of (records, query). It holds no state
//! between calls and never mutates its input.

mod engine;
mod types;

pub use engine::{find_streaks, find_streaks_with};
pub use types::{GroupKey, Streak, StreakQuery};
