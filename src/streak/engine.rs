// src/streak/engine.rs
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{Result, StatError};
use crate::model::GameRecord;
use crate::progress::{NullProgress, Progress};

use super::types::{GroupKey, Streak, StreakQuery};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum PartKey<'a> {
    Id(u64),
    Name(&'a str),
}

/// Every maximal run of consecutive games (as played, not calendar days)
/// where `statistic >= threshold`, longest first, then by average.
///
/// Query parameters are validated before anything is scanned. An empty
/// input or a query nobody satisfies yields an empty list.
pub fn find_streaks(records: &[GameRecord], query: &StreakQuery) -> Result<Vec<Streak>> {
    find_streaks_with(records, query, &mut NullProgress)
}

/// Same as [`find_streaks`], reporting each scanned player partition to
/// `progress` and stopping with `StatError::Cancelled` when it asks to.
pub fn find_streaks_with(
    records: &[GameRecord],
    query: &StreakQuery,
    progress: &mut dyn Progress,
) -> Result<Vec<Streak>> {
    query.validate()?;

    let mut parts = partition(records, query);
    progress.begin(parts.len());

    let mut out = Vec::new();
    for games in parts.iter_mut() {
        if progress.is_cancelled() {
            progress.finish();
            logd!("Streaks: cancelled after {} result(s)", out.len());
            return Err(StatError::Cancelled);
        }

        // Stable: equal dates (name grouping only) keep input order.
        games.sort_by_key(|g| g.game_date);
        scan_partition(games, query, &mut out);

        if let Some(last) = games.last() {
            progress.item_done(&last.player_name);
        }
    }
    progress.finish();

    out.sort_by(|a, b| {
        b.length
            .cmp(&a.length)
            .then_with(|| b.average_value.total_cmp(&a.average_value))
    });

    logd!(
        "Streaks: {} >= {} (min {}, active={}) → {} run(s) over {} player(s)",
        query.statistic, query.threshold, query.min_length,
        query.active_only, out.len(), parts.len()
    );
    Ok(out)
}

/// Group records per player, in order of first appearance.
fn partition<'a>(records: &'a [GameRecord], query: &StreakQuery) -> Vec<Vec<&'a GameRecord>> {
    let mut slot: HashMap<PartKey<'a>, usize> = HashMap::new();
    let mut parts: Vec<Vec<&'a GameRecord>> = Vec::new();

    for r in records {
        if query.as_of.is_some_and(|d| r.game_date > d) {
            continue;
        }
        let key = match query.group_by {
            GroupKey::PlayerId => PartKey::Id(r.player_id),
            GroupKey::PlayerName => PartKey::Name(r.player_name.as_str()),
        };
        let ix = *slot.entry(key).or_insert_with(|| {
            parts.push(Vec::new());
            parts.len() - 1
        });
        parts[ix].push(r);
    }
    parts
}

/// Single pass over one date-sorted partition.
fn scan_partition(games: &[&GameRecord], query: &StreakQuery, out: &mut Vec<Streak>) {
    let Some(owner) = games.last() else { return };
    let last_played = owner.game_date;

    let mut run_start: Option<usize> = None;
    // One step past the end closes a run that reaches the last game.
    for i in 0..=games.len() {
        let hit = games
            .get(i)
            .is_some_and(|g| g.stat(query.statistic) >= query.threshold);

        match (hit, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if let Some(s) = close_run(&games[start..i], owner, last_played, query) {
                    out.push(s);
                }
                run_start = None;
            }
            _ => {}
        }
    }
}

fn close_run(
    run: &[&GameRecord],
    owner: &GameRecord,
    last_played: NaiveDate,
    query: &StreakQuery,
) -> Option<Streak> {
    let (first, last) = (run.first()?, run.last()?);
    if run.len() < query.min_length {
        return None;
    }
    if query.active_only && last.game_date != last_played {
        return None;
    }

    let total: f64 = run.iter().map(|g| g.stat(query.statistic)).sum();
    Some(Streak {
        player_id: owner.player_id,
        player_name: owner.player_name.clone(),
        length: run.len(),
        start_date: first.game_date,
        end_date: last.game_date,
        average_value: total / run.len() as f64,
        wins_in_streak: run.iter().filter(|g| g.is_win()).count(),
    })
}
