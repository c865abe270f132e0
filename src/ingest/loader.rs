// src/ingest/loader.rs
//
// CSV text → GameRecords.
//
// - Required columns: PLAYER_ID, PLAYER_NAME, GAME_DATE, MATCHUP, WL.
// - Stat columns are optional; blank or non-numeric cells coerce to 0.
// - Rows without a usable id, date or W/L are skipped (unfinished games,
//   truncated lines) and counted in the report.
// - SEASON_ID falls back to the season the game date belongs to.

use crate::core::{dates::parse_game_date, matchup::parse_matchup, sanitize::{coerce_f64, normalize_ws, parse_id}};
use crate::csv::{parse_rows, split_header, Header};
use crate::error::{Result, StatError};
use crate::model::{GameRecord, Location, Stat, StatLine, WinLoss};

use super::{derive::fill_derived, season::season_for_date};

pub const REQUIRED_COLUMNS: [&str; 5] = ["PLAYER_ID", "PLAYER_NAME", "GAME_DATE", "MATCHUP", "WL"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_read: usize,
    pub loaded: usize,
    pub skipped: usize,
}

impl LoadReport {
    pub fn absorb(&mut self, other: LoadReport) {
        self.rows_read += other.rows_read;
        self.loaded += other.loaded;
        self.skipped += other.skipped;
    }
}

struct Columns {
    player_id: usize,
    player_name: usize,
    game_date: usize,
    matchup: usize,
    wl: usize,
    season: Option<usize>,
    team: Option<usize>,
    stats: Vec<(Stat, usize)>,
    missing_derived: Vec<Stat>,
}

impl Columns {
    fn resolve(header: &Header, derive_missing: bool) -> Result<Self> {
        let need = |name: &str| {
            header
                .index_of(name)
                .ok_or_else(|| StatError::MissingColumn(s!(name)))
        };

        let stats: Vec<(Stat, usize)> = Stat::ALL
            .into_iter()
            .filter_map(|s| header.index_of(s.column()).map(|ix| (s, ix)))
            .collect();

        let missing_derived = if derive_missing {
            Stat::ALL
                .into_iter()
                .filter(|s| s.is_derived() && !stats.iter().any(|(have, _)| have == s))
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            player_id: need(REQUIRED_COLUMNS[0])?,
            player_name: need(REQUIRED_COLUMNS[1])?,
            game_date: need(REQUIRED_COLUMNS[2])?,
            matchup: need(REQUIRED_COLUMNS[3])?,
            wl: need(REQUIRED_COLUMNS[4])?,
            season: header.index_of("SEASON_ID"),
            team: header.index_of("TEAM_ABBREVIATION"),
            stats,
            missing_derived,
        })
    }
}

/// Parse one dataset. `source` only names the input in errors.
pub fn parse_records(
    text: &str,
    source: &str,
    derive_missing: bool,
) -> Result<(Vec<GameRecord>, LoadReport)> {
    let Some((header, body)) = split_header(parse_rows(text, ',')) else {
        return Err(StatError::EmptyDataset(s!(source)));
    };
    let cols = Columns::resolve(&header, derive_missing)?;
    if !cols.missing_derived.is_empty() {
        logd!("Load: {source} lacks {:?}; deriving", cols.missing_derived);
    }

    let mut report = LoadReport { rows_read: body.len(), ..LoadReport::default() };
    let mut out = Vec::with_capacity(body.len());

    for (line_no, row) in body.iter().enumerate() {
        match parse_row(row, &cols) {
            Some(rec) => out.push(rec),
            None => {
                report.skipped += 1;
                logd!("Load: {source} row {} skipped", line_no + 2);
            }
        }
    }
    report.loaded = out.len();
    Ok((out, report))
}

fn parse_row(row: &[String], cols: &Columns) -> Option<GameRecord> {
    let cell = |ix: usize| row.get(ix).map(String::as_str).unwrap_or("");

    let player_id = parse_id(cell(cols.player_id))?;
    let game_date = parse_game_date(cell(cols.game_date))?;
    let win_loss = WinLoss::parse(cell(cols.wl))?;

    let player_name = normalize_ws(cell(cols.player_name));
    let matchup = normalize_ws(cell(cols.matchup));
    let (location, opponent) = parse_matchup(&matchup).unwrap_or((Location::Home, s!()));

    let season_id = cols
        .season
        .map(|ix| cell(ix).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| season_for_date(game_date));
    let team = cols.team.map(|ix| cell(ix).trim().to_string()).unwrap_or_default();

    let mut stats = StatLine::default();
    for &(stat, ix) in &cols.stats {
        stats.set(stat, coerce_f64(cell(ix)));
    }
    fill_derived(&mut stats, &cols.missing_derived);

    Some(GameRecord {
        season_id,
        player_id,
        player_name,
        team,
        game_date,
        matchup,
        location,
        opponent,
        win_loss,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
SEASON_ID,PLAYER_ID,PLAYER_NAME,TEAM_ABBREVIATION,GAME_DATE,MATCHUP,WL,PTS,REB,AST,FGA,FTA,GAME_SCORE,TS_PCT
2024-25,2544,LeBron James,LAL,2024-10-22,LAL vs. MIN,W,16,5,5,13,2,9.1,0.55
2024-25,2544,LeBron James,LAL,2024-10-25,LAL @ PHX,L,DNP,,x,0,0,0,0
";

    #[test]
    fn parses_rows_and_matchups() {
        let (recs, report) = parse_records(SAMPLE, "sample", true).unwrap();
        assert_eq!(report, LoadReport { rows_read: 2, loaded: 2, skipped: 0 });

        let r0 = &recs[0];
        assert_eq!(r0.player_id, 2544);
        assert_eq!(r0.team, "LAL");
        assert_eq!(r0.game_date, NaiveDate::from_ymd_opt(2024, 10, 22).unwrap());
        assert_eq!(r0.location, Location::Home);
        assert_eq!(r0.opponent, "MIN");
        assert_eq!(r0.win_loss, WinLoss::Win);
        assert_eq!(r0.stat(Stat::GameScore), 9.1);

        let r1 = &recs[1];
        assert_eq!(r1.location, Location::Away);
        assert_eq!(r1.opponent, "PHX");
        assert_eq!(r1.stat(Stat::Points), 0.0);
        assert_eq!(r1.stat(Stat::Assists), 0.0);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let text = "PLAYER_ID,PLAYER_NAME,GAME_DATE,WL\n1,A,2024-01-01,W\n";
        match parse_records(text, "t", true) {
            Err(StatError::MissingColumn(c)) => assert_eq!(c, "MATCHUP"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(matches!(parse_records("", "t", true), Err(StatError::EmptyDataset(_))));
    }

    #[test]
    fn unfinished_games_are_skipped() {
        let text = "\
PLAYER_ID,PLAYER_NAME,GAME_DATE,MATCHUP,WL,PTS
1,A,2024-01-01,AAA vs. BBB,W,10
1,A,2024-01-03,AAA @ CCC,,0
1,A,not-a-date,AAA @ CCC,L,0
";
        let (recs, report) = parse_records(text, "t", true).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn season_and_derived_columns_fill_in() {
        let text = "\
PLAYER_ID,PLAYER_NAME,GAME_DATE,MATCHUP,WL,PTS,FGA,FTA
7,B,2025-02-01,AAA vs. BBB,W,20,10,5
";
        let (recs, _) = parse_records(text, "t", true).unwrap();
        assert_eq!(recs[0].season_id, "2024-25");
        // 20 / (2 * 12.2)
        assert_eq!(recs[0].stat(Stat::TrueShootingPct), 0.82);
        assert_ne!(recs[0].stat(Stat::GameScore), 0.0);

        let (raw, _) = parse_records(text, "t", false).unwrap();
        assert_eq!(raw[0].stat(Stat::TrueShootingPct), 0.0);
    }
}
