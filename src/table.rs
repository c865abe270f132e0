// src/table.rs
//! TableData: the common headers + rows shape for every view.
//!
//! The GUI renders it through the shared data table component, the CLI
//! prints it through comfy-table, and export writes it as CSV/TSV/JSON.
//! Numbers are formatted here once so every surface shows the same text.

use serde::Serialize;

use crate::model::{GameRecord, Stat};
use crate::query::{HeadToHead, LeaderRow, PlayerProfile, RecordBook};
use crate::streak::Streak;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self { Self::default() }

    pub fn with(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn nrows(&self) -> usize { self.rows.len() }

    pub fn ncols(&self) -> usize {
        if self.headers.is_empty() {
            self.rows.first().map(|r| r.len()).unwrap_or(0)
        } else {
            self.headers.len()
        }
    }

    /// Rows as header-keyed JSON objects.
    pub fn to_json(&self) -> serde_json::Value {
        let rows = self
            .rows
            .iter()
            .map(|r| {
                let obj = self
                    .headers
                    .iter()
                    .zip(r)
                    .map(|(h, v)| (h.clone(), serde_json::Value::String(v.clone())))
                    .collect();
                serde_json::Value::Object(obj)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

fn heads(names: &[&str]) -> Vec<String> {
    names.iter().map(|h| s!(*h)).collect()
}

/// One decimal, the dashboard's default for averages.
pub fn fmt1(v: f64) -> String { format!("{v:.1}") }

/// Stat cell: integral values without decimals, TS% as a percentage.
pub fn fmt_stat(stat: Stat, v: f64) -> String {
    match stat {
        Stat::TrueShootingPct => format!("{:.1}%", v * 100.0),
        _ if v.fract() == 0.0 => format!("{v:.0}"),
        _ => fmt1(v),
    }
}

pub fn streaks_table(streaks: &[Streak], stat: Stat) -> TableData {
    let avg = format!("Avg {stat}");
    let headers = heads(&["Player", "Games", "Start", "End"])
        .into_iter()
        .chain([avg, s!("Wins")])
        .collect();
    let rows = streaks
        .iter()
        .map(|s| {
            vec![
                s.player_name.clone(),
                s.length.to_string(),
                s.start_date.to_string(),
                s.end_date.to_string(),
                fmt1(s.average_value),
                s.wins_in_streak.to_string(),
            ]
        })
        .collect();
    TableData::with(headers, rows)
}

/// Box-score rows as listed by the game finder and the profile.
pub fn games_table<'a, I>(games: I) -> TableData
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    let stats = [Stat::Points, Stat::Rebounds, Stat::Assists, Stat::GameScore, Stat::TrueShootingPct];
    let headers = heads(&["Date", "Player", "Team", "Matchup", "WL"])
        .into_iter()
        .chain(stats.iter().map(|s| s!(s.column())))
        .collect();
    let rows = games
        .into_iter()
        .map(|g| {
            let mut row = vec![
                g.game_date.to_string(),
                g.player_name.clone(),
                g.team.clone(),
                g.matchup.clone(),
                s!(g.win_loss.code()),
            ];
            row.extend(stats.iter().map(|s| fmt_stat(*s, g.stat(*s))));
            row
        })
        .collect();
    TableData::with(headers, rows)
}

pub fn seasons_table(profile: &PlayerProfile) -> TableData {
    let headers = heads(&["Season", "GP", "PTS", "REB", "AST", "TS%", "GmSc"]);
    let rows = profile
        .seasons
        .iter()
        .map(|s| {
            vec![
                s.season_id.clone(),
                s.games.to_string(),
                fmt1(s.points),
                fmt1(s.rebounds),
                fmt1(s.assists),
                fmt_stat(Stat::TrueShootingPct, s.ts_pct),
                fmt1(s.game_score),
            ]
        })
        .collect();
    TableData::with(headers, rows)
}

pub fn versus_table(h: &HeadToHead) -> TableData {
    let headers = vec![s!("Stat"), h.left.player_name.clone(), h.right.player_name.clone()];
    let rows = h
        .rows()
        .map(|(stat, l, r)| {
            let cell = |v: f64| match stat {
                Stat::TrueShootingPct => fmt_stat(stat, v),
                _ => fmt1(v),
            };
            vec![s!(stat.label()), cell(l), cell(r)]
        })
        .collect();
    TableData::with(headers, rows)
}

pub fn leaders_table(rows: &[LeaderRow]) -> TableData {
    let body = rows
        .iter()
        .enumerate()
        .map(|(i, r)| vec![(i + 1).to_string(), r.player_name.clone(), r.hits.to_string()])
        .collect();
    TableData::with(heads(&["#", "Player", "Games"]), body)
}

pub fn records_table(book: &RecordBook) -> TableData {
    let rows = book
        .marks()
        .map(|m| {
            vec![
                s!(m.stat.label()),
                fmt_stat(m.stat, m.value),
                m.player_name.clone(),
                m.opponent.clone(),
                m.game_date.to_string(),
            ]
        })
        .collect();
    TableData::with(heads(&["Record", "Value", "Player", "Opponent", "Date"]), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_cells() {
        assert_eq!(fmt_stat(Stat::Points, 31.0), "31");
        assert_eq!(fmt_stat(Stat::GameScore, 27.34), "27.3");
        assert_eq!(fmt_stat(Stat::TrueShootingPct, 0.6123), "61.2%");
    }

    #[test]
    fn json_rows_are_keyed_by_header() {
        let t = TableData::with(heads(&["a", "b"]), vec![vec![s!("1"), s!("x")]]);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t.to_json().to_string(), r#"[{"a":"1","b":"x"}]"#);
    }
}
