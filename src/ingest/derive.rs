// src/ingest/derive.rs
//
// Advanced metrics computed at ingestion. Downstream code reads them as
// plain GAME_SCORE / TS_PCT columns and never recomputes them.

use crate::model::{Stat, StatLine};

/// PTS / (2 * (FGA + 0.44 * FTA)). Zero when there were no attempts.
pub fn true_shooting_pct(line: &StatLine) -> f64 {
    let tsa = line.get(Stat::FieldGoalsAttempted) + 0.44 * line.get(Stat::FreeThrowsAttempted);
    if tsa <= 0.0 {
        return 0.0;
    }
    line.get(Stat::Points) / (2.0 * tsa)
}

/// Hollinger game score.
pub fn game_score(line: &StatLine) -> f64 {
    use Stat::*;
    let g = |s: Stat| line.get(s);

    g(Points)
        + 0.4 * g(FieldGoalsMade)
        - 0.7 * g(FieldGoalsAttempted)
        - 0.4 * (g(FreeThrowsAttempted) - g(FreeThrowsMade))
        + 0.7 * g(OffensiveRebounds)
        + 0.3 * g(DefensiveRebounds)
        + g(Steals)
        + 0.7 * g(Assists)
        + 0.7 * g(Blocks)
        - 0.4 * g(PersonalFouls)
        - g(Turnovers)
}

/// Fill the derived stats named in `missing`.
pub fn fill_derived(line: &mut StatLine, missing: &[Stat]) {
    for &stat in missing {
        match stat {
            Stat::GameScore => line.set(stat, round1(game_score(line))),
            Stat::TrueShootingPct => line.set(stat, round3(true_shooting_pct(line))),
            _ => {}
        }
    }
}

fn round1(v: f64) -> f64 { (v * 10.0).round() / 10.0 }
fn round3(v: f64) -> f64 { (v * 1000.0).round() / 1000.0 }
