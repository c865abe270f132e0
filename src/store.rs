// src/store.rs
//
// The record relation and the process-wide handle to it.
//
// - RecordRelation: immutable rows. Views and the streak engine borrow it.
// - DatasetHandle:  holds the current relation behind an Arc; reload swaps
//                   the whole Arc so a query never sees a half-loaded set.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::error::Result;
use crate::ingest::{parse_records, LoadReport};
use crate::model::GameRecord;

#[derive(Clone, Debug, Default)]
pub struct RecordRelation {
    records: Vec<GameRecord>,
}

impl RecordRelation {
    pub fn new(records: Vec<GameRecord>) -> Self { Self { records } }
    pub fn empty() -> Self { Self::default() }

    pub fn records(&self) -> &[GameRecord] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> { self.records.iter() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct season ids, newest first.
    pub fn seasons(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.season_id.as_str()).collect();
        set.into_iter().rev().map(String::from).collect()
    }

    /// Distinct team abbreviations, sorted.
    pub fn teams(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .map(|r| r.team.as_str())
            .filter(|t| !t.is_empty())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// (id, display name) per player, sorted by name then id.
    /// The name is the one on the player's most recent record.
    pub fn players(&self) -> Vec<(u64, String)> {
        let mut latest: HashMap<u64, (NaiveDate, &str)> = HashMap::new();
        for r in &self.records {
            let e = latest.entry(r.player_id).or_insert((r.game_date, r.player_name.as_str()));
            if r.game_date >= e.0 {
                *e = (r.game_date, r.player_name.as_str());
            }
        }
        let mut out: Vec<(u64, String)> =
            latest.into_iter().map(|(id, (_, n))| (id, s!(n))).collect();
        out.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        out
    }

    pub fn player_records(&self, player_id: u64) -> Vec<&GameRecord> {
        self.records.iter().filter(|r| r.player_id == player_id).collect()
    }

    /// First id whose records carry `name` (case-insensitive).
    pub fn find_player(&self, name: &str) -> Option<u64> {
        let name = name.trim();
        self.records
            .iter()
            .find(|r| r.player_name.eq_ignore_ascii_case(name))
            .map(|r| r.player_id)
    }

    /// Keep only the given seasons. An empty selection keeps everything.
    pub fn filter_seasons(&self, seasons: &[String]) -> RecordRelation {
        if seasons.is_empty() {
            return self.clone();
        }
        let records = self
            .records
            .iter()
            .filter(|r| seasons.iter().any(|s| *s == r.season_id))
            .cloned()
            .collect();
        RecordRelation { records }
    }
}

impl FromIterator<GameRecord> for RecordRelation {
    fn from_iter<I: IntoIterator<Item = GameRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Holder for the current relation. Cheap to share across threads.
#[derive(Debug, Default)]
pub struct DatasetHandle {
    current: RwLock<Arc<RecordRelation>>,
}

impl DatasetHandle {
    pub fn new(rel: RecordRelation) -> Self {
        Self { current: RwLock::new(Arc::new(rel)) }
    }

    /// The relation as of now. Later replacements don't affect it.
    pub fn snapshot(&self) -> Arc<RecordRelation> {
        // The guarded value is an Arc that is swapped whole; a poisoned lock
        // still holds a complete relation.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Swap in a new relation. Returns the previous one.
    pub fn replace(&self, rel: RecordRelation) -> Arc<RecordRelation> {
        let next = Arc::new(rel);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, next)
    }
}

/* ---------------- Loading ---------------- */

pub fn load_file(path: &Path, derive_missing: bool) -> Result<(Vec<GameRecord>, LoadReport)> {
    let text = fs::read_to_string(path)?;
    let t = std::time::Instant::now();
    let out = parse_records(&text, &path.display().to_string(), derive_missing)?;
    logd!("Load: parsed {} in {:?}", path.display(), t.elapsed());
    Ok(out)
}

/// Load and merge several files. Later files win on (player, date).
/// Output is ordered by date, then player id.
pub fn load_files<P: AsRef<Path>>(
    paths: &[P],
    derive_missing: bool,
) -> Result<(RecordRelation, LoadReport)> {
    let mut report = LoadReport::default();
    let mut batches = Vec::with_capacity(paths.len());
    for p in paths {
        let (recs, r) = load_file(p.as_ref(), derive_missing)?;
        logf!(
            "Load: {} (rows={}, loaded={}, skipped={})",
            p.as_ref().display(), r.rows_read, r.loaded, r.skipped
        );
        report.absorb(r);
        batches.push(recs);
    }
    Ok((merge(batches), report))
}

/// Upsert batches in order, keyed by (player_id, game_date).
pub fn merge(batches: Vec<Vec<GameRecord>>) -> RecordRelation {
    let mut by_key: HashMap<(u64, NaiveDate), GameRecord> = HashMap::new();
    for batch in batches {
        for rec in batch {
            by_key.insert((rec.player_id, rec.game_date), rec); // replace if exists
        }
    }

    let mut records: Vec<GameRecord> = by_key.into_values().collect();
    records.sort_by(|a, b| (a.game_date, a.player_id).cmp(&(b.game_date, b.player_id)));
    RecordRelation::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, WinLoss};

    fn rec(id: u64, name: &str, season: &str, day: u32, pts: f64) -> GameRecord {
        GameRecord {
            season_id: s!(season),
            player_id: id,
            player_name: s!(name),
            team: s!("AAA"),
            game_date: NaiveDate::from_ymd_opt(2024, 11, day).unwrap(),
            matchup: s!("AAA vs. BBB"),
            location: Location::Home,
            opponent: s!("BBB"),
            win_loss: WinLoss::Win,
            stats: stat_line![Points => pts],
        }
    }

    #[test]
    fn merge_later_batch_wins_and_sorts() {
        let old = vec![rec(1, "A", "2024-25", 2, 10.0), rec(2, "B", "2024-25", 1, 5.0)];
        let new = vec![rec(1, "A", "2024-25", 2, 40.0)];
        let rel = merge(vec![old, new]);
        assert_eq!(rel.len(), 2);
        assert_eq!(rel.records()[0].player_id, 2);
        assert_eq!(rel.records()[1].stat(crate::model::Stat::Points), 40.0);
    }

    #[test]
    fn seasons_newest_first_and_filter() {
        let rel: RecordRelation = vec![
            rec(1, "A", "2022-23", 1, 0.0),
            rec(1, "A", "2024-25", 2, 0.0),
            rec(2, "B", "2023-24", 3, 0.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(rel.seasons(), vec!["2024-25", "2023-24", "2022-23"]);
        assert_eq!(rel.filter_seasons(&[s!("2023-24")]).len(), 1);
        assert_eq!(rel.filter_seasons(&[]).len(), 3);
    }

    #[test]
    fn players_use_latest_name() {
        let rel = RecordRelation::new(vec![
            rec(1, "Ron Artest", "x", 1, 0.0),
            rec(1, "Metta World Peace", "x", 5, 0.0),
            rec(2, "Anthony Davis", "x", 2, 0.0),
        ]);
        assert_eq!(
            rel.players(),
            vec![(2, s!("Anthony Davis")), (1, s!("Metta World Peace"))]
        );
        assert_eq!(rel.find_player("ron artest"), Some(1));
        assert_eq!(rel.find_player("nobody"), None);
    }

    #[test]
    fn handle_swaps_whole_relation() {
        let h = DatasetHandle::new(RecordRelation::new(vec![rec(1, "A", "x", 1, 0.0)]));
        let before = h.snapshot();
        let prev = h.replace(RecordRelation::empty());
        assert_eq!(before.len(), 1);
        assert_eq!(prev.len(), 1);
        assert!(h.snapshot().is_empty());
    }
}
