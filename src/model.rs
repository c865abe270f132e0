// src/model.rs
//
// Row types for the record relation. One GameRecord per (player, game).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::QueryError;

/// The fixed set of per-game statistics a record carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    Minutes,
    FieldGoalsMade,
    FieldGoalsAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    OffensiveRebounds,
    DefensiveRebounds,
    PersonalFouls,
    GameScore,
    TrueShootingPct,
}

impl Stat {
    pub const COUNT: usize = 16;

    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Points,
        Stat::Rebounds,
        Stat::Assists,
        Stat::Steals,
        Stat::Blocks,
        Stat::Turnovers,
        Stat::Minutes,
        Stat::FieldGoalsMade,
        Stat::FieldGoalsAttempted,
        Stat::FreeThrowsMade,
        Stat::FreeThrowsAttempted,
        Stat::OffensiveRebounds,
        Stat::DefensiveRebounds,
        Stat::PersonalFouls,
        Stat::GameScore,
        Stat::TrueShootingPct,
    ];

    #[inline]
    pub fn index(self) -> usize { self as usize }

    /// Column code as it appears in the dataset header.
    pub fn column(self) -> &'static str {
        match self {
            Stat::Points => "PTS",
            Stat::Rebounds => "REB",
            Stat::Assists => "AST",
            Stat::Steals => "STL",
            Stat::Blocks => "BLK",
            Stat::Turnovers => "TOV",
            Stat::Minutes => "MIN",
            Stat::FieldGoalsMade => "FGM",
            Stat::FieldGoalsAttempted => "FGA",
            Stat::FreeThrowsMade => "FTM",
            Stat::FreeThrowsAttempted => "FTA",
            Stat::OffensiveRebounds => "OREB",
            Stat::DefensiveRebounds => "DREB",
            Stat::PersonalFouls => "PF",
            Stat::GameScore => "GAME_SCORE",
            Stat::TrueShootingPct => "TS_PCT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stat::Points => "Points",
            Stat::Rebounds => "Rebounds",
            Stat::Assists => "Assists",
            Stat::Steals => "Steals",
            Stat::Blocks => "Blocks",
            Stat::Turnovers => "Turnovers",
            Stat::Minutes => "Minutes",
            Stat::FieldGoalsMade => "Field goals made",
            Stat::FieldGoalsAttempted => "Field goals attempted",
            Stat::FreeThrowsMade => "Free throws made",
            Stat::FreeThrowsAttempted => "Free throws attempted",
            Stat::OffensiveRebounds => "Offensive rebounds",
            Stat::DefensiveRebounds => "Defensive rebounds",
            Stat::PersonalFouls => "Personal fouls",
            Stat::GameScore => "Game score",
            Stat::TrueShootingPct => "True shooting %",
        }
    }

    /// Derived by ingestion rather than reported by the provider.
    pub fn is_derived(self) -> bool {
        matches!(self, Stat::GameScore | Stat::TrueShootingPct)
    }

    pub fn from_column(code: &str) -> Option<Stat> {
        let code = code.trim();
        Stat::ALL.into_iter().find(|s| s.column().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Stat {
    type Err = QueryError;

    /// Accepts the column code ("PTS") or the label ("points"), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Stat::from_column(t)
            .or_else(|| Stat::ALL.into_iter().find(|st| st.label().eq_ignore_ascii_case(t)))
            .ok_or_else(|| QueryError::UnknownStatistic(s!(t)))
    }
}

impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

/// One value per `Stat`. Missing values are 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatLine([f64; Stat::COUNT]);

impl StatLine {
    #[inline]
    pub fn get(&self, stat: Stat) -> f64 { self.0[stat.index()] }

    #[inline]
    pub fn set(&mut self, stat: Stat, value: f64) { self.0[stat.index()] = value; }
}

impl Serialize for StatLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Stat::COUNT))?;
        for stat in Stat::ALL {
            map.serialize_entry(stat.column(), &self.get(stat))?;
        }
        map.end()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum WinLoss {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl WinLoss {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "W" | "w" => Some(WinLoss::Win),
            "L" | "l" => Some(WinLoss::Loss),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            WinLoss::Win => "W",
            WinLoss::Loss => "L",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Location {
    Home,
    Away,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GameRecord {
    pub season_id: String,
    pub player_id: u64,
    pub player_name: String,
    pub team: String,
    pub game_date: NaiveDate,
    pub matchup: String,
    pub location: Location,
    pub opponent: String,
    pub win_loss: WinLoss,
    pub stats: StatLine,
}

impl GameRecord {
    #[inline]
    pub fn stat(&self, stat: Stat) -> f64 { self.stats.get(stat) }

    #[inline]
    pub fn is_win(&self) -> bool { self.win_loss == WinLoss::Win }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_parses_code_and_label_any_case() {
        assert_eq!("PTS".parse::<Stat>(), Ok(Stat::Points));
        assert_eq!("pts".parse::<Stat>(), Ok(Stat::Points));
        assert_eq!(" Assists ".parse::<Stat>(), Ok(Stat::Assists));
        assert_eq!("game_score".parse::<Stat>(), Ok(Stat::GameScore));
        assert_eq!(
            "dunks".parse::<Stat>(),
            Err(QueryError::UnknownStatistic(s!("dunks")))
        );
    }

    #[test]
    fn stat_indices_match_all_order() {
        for (i, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }

    #[test]
    fn stat_line_macro_leaves_rest_zero() {
        let line = stat_line![Points => 31, Assists => 7.5];
        assert_eq!(line.get(Stat::Points), 31.0);
        assert_eq!(line.get(Stat::Assists), 7.5);
        assert_eq!(line.get(Stat::Rebounds), 0.0);
    }

    #[test]
    fn stat_line_serializes_as_column_map() {
        let line = stat_line![Points => 12];
        let v = serde_json::to_value(line).unwrap();
        assert_eq!(v["PTS"], 12.0);
        assert_eq!(v["TS_PCT"], 0.0);
    }
}
