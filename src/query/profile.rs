// src/query/profile.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::consts::{HEADSHOT_URL, PROFILE_LAST_GAMES, PROFILE_TREND_GAMES, TEAM_LOGO_URL};
use crate::error::{QueryError, Result};
use crate::model::{GameRecord, Stat};
use crate::store::RecordRelation;

use super::mean_of;

pub fn headshot_url(player_id: u64) -> String {
    format!("{HEADSHOT_URL}/{player_id}.png")
}

pub fn team_logo_url(team: &str) -> String {
    format!("{TEAM_LOGO_URL}/{team}.png")
}

/// Per-season means.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonSplit {
    pub season_id: String,
    pub games: usize,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub ts_pct: f64,
    pub game_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub points: f64,
    pub game_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player_id: u64,
    pub player_name: String,
    /// Team on the most recent game.
    pub team: String,
    pub games: usize,
    pub avg_points: f64,
    pub avg_rebounds: f64,
    pub avg_assists: f64,
    pub best_game_score: f64,
    /// Newest season first.
    pub seasons: Vec<SeasonSplit>,
    /// Newest game first.
    pub last_games: Vec<GameRecord>,
    /// Oldest first, covering the most recent games.
    pub trend: Vec<TrendPoint>,
    pub headshot_url: String,
}

pub fn player_profile(rel: &RecordRelation, player_id: u64) -> Result<PlayerProfile> {
    let mut games = rel.player_records(player_id);
    if games.is_empty() {
        return Err(QueryError::UnknownPlayer(player_id.to_string()).into());
    }
    // Newest first
    games.sort_by(|a, b| b.game_date.cmp(&a.game_date));
    let latest = games[0];

    let mut by_season: BTreeMap<&str, Vec<&GameRecord>> = BTreeMap::new();
    for g in games.iter().copied() {
        by_season.entry(g.season_id.as_str()).or_default().push(g);
    }
    let seasons = by_season
        .into_iter()
        .rev()
        .map(|(season, gs)| SeasonSplit {
            season_id: s!(season),
            games: gs.len(),
            points: mean_of(&gs, Stat::Points),
            rebounds: mean_of(&gs, Stat::Rebounds),
            assists: mean_of(&gs, Stat::Assists),
            ts_pct: mean_of(&gs, Stat::TrueShootingPct),
            game_score: mean_of(&gs, Stat::GameScore),
        })
        .collect();

    let mut trend: Vec<TrendPoint> = games
        .iter()
        .take(PROFILE_TREND_GAMES)
        .map(|g| TrendPoint {
            date: g.game_date,
            points: g.stat(Stat::Points),
            game_score: g.stat(Stat::GameScore),
        })
        .collect();
    trend.reverse();

    let best_game_score = games
        .iter()
        .map(|g| g.stat(Stat::GameScore))
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(PlayerProfile {
        player_id,
        player_name: latest.player_name.clone(),
        team: latest.team.clone(),
        games: games.len(),
        avg_points: mean_of(&games, Stat::Points),
        avg_rebounds: mean_of(&games, Stat::Rebounds),
        avg_assists: mean_of(&games, Stat::Assists),
        best_game_score,
        seasons,
        last_games: games.iter().take(PROFILE_LAST_GAMES).map(|g| (*g).clone()).collect(),
        trend,
        headshot_url: headshot_url(player_id),
    })
}
