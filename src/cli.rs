// src/cli.rs
//! Command-line front end. Each subcommand maps to one dashboard view.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::config::consts::*;
use crate::config::options::{AppOptions, ExportFormat, ExportOptions};
use crate::error::QueryError;
use crate::file;
use crate::ingest;
use crate::model::Stat;
use crate::query::{self, FinderQuery};
use crate::store::{self, RecordRelation};
use crate::streak::{self, GroupKey, StreakQuery};
use crate::table::{self, TableData};

/// Box-score browser with streak detection.
#[derive(Parser, Debug)]
#[command(name = "statpulse", author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file; repeat to merge (later files win). Defaults to $STATPULSE_DATA.
    #[arg(long = "data", value_name = "FILE", global = true)]
    data: Vec<PathBuf>,

    /// Restrict to a season such as 2024-25, or a range 2021-22..2024-25; repeatable.
    #[arg(long = "season", value_name = "SEASON", global = true)]
    seasons: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutFormat::Table, global = true)]
    format: OutFormat,

    /// Write to a file (or directory) instead of stdout.
    #[arg(short = 'o', long, global = true)]
    out: Option<PathBuf>,

    /// Omit the header line in CSV/TSV output.
    #[arg(long, global = true)]
    no_headers: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutFormat {
    Table,
    Csv,
    Tsv,
    Json,
}

impl OutFormat {
    fn export(self) -> ExportFormat {
        match self {
            OutFormat::Tsv => ExportFormat::Tsv,
            OutFormat::Json => ExportFormat::Json,
            OutFormat::Table | OutFormat::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs of consecutive games at or above a threshold.
    Streaks(StreaksArgs),
    /// Single-game performances passing stat minimums.
    Finder(FinderArgs),
    /// One player's averages, season splits and recent games.
    Profile {
        /// Player id or exact name.
        player: String,
    },
    /// Two players' career means side by side.
    Versus { left: String, right: String },
    /// Players ranked by games at or above a threshold.
    Leaders {
        #[arg(long, default_value = "PTS")]
        stat: String,
        #[arg(long, default_value_t = STREAK_DEFAULT_THRESHOLD)]
        threshold: f64,
        #[arg(long, default_value_t = LEADERBOARD_SIZE)]
        limit: usize,
    },
    /// Single-game records and the best performances by game score.
    Records,
    /// Seasons present in the dataset, newest first.
    Seasons,
}

#[derive(Parser, Debug)]
struct StreaksArgs {
    /// Column code or label, e.g. PTS or "assists".
    #[arg(long, default_value = "PTS")]
    stat: String,

    #[arg(long, default_value_t = STREAK_DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    threshold: f64,

    #[arg(long, default_value_t = STREAK_DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Only streaks still alive at the player's last game.
    #[arg(long)]
    active: bool,

    /// Group players by display name instead of id.
    #[arg(long)]
    by_name: bool,

    /// Ignore games after this date (YYYY-MM-DD).
    #[arg(long)]
    as_of: Option<NaiveDate>,

    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser, Debug)]
struct FinderArgs {
    /// Team abbreviation; repeatable.
    #[arg(long = "team")]
    teams: Vec<String>,

    #[arg(long, default_value_t = FINDER_MIN_PTS)]
    min_pts: f64,

    #[arg(long, default_value_t = 0.0)]
    min_ast: f64,

    #[arg(long, default_value_t = 0.0)]
    min_reb: f64,

    #[arg(long, default_value_t = FINDER_LIMIT)]
    limit: usize,
}

pub fn run() -> Result<()> {
    crate::log::init_stderr(DEFAULT_LOG_LEVEL);
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Streaks(a) => {
            // Parameters are checked before any data is loaded.
            let q = streak_query(a)?;
            let rel = load(&cli)?;
            let mut found = streak::find_streaks(rel.records(), &q)?;
            if let Some(n) = a.limit {
                found.truncate(n);
            }
            let subject = format!("{} {}", q.statistic, q.threshold);
            emit(&cli, &table::streaks_table(&found, q.statistic), &found, "streaks", &subject)
        }
        Command::Finder(a) => {
            let rel = load(&cli)?;
            let q = FinderQuery { teams: a.teams.clone(), limit: a.limit, ..FinderQuery::default() }
                .with_min(Stat::Points, a.min_pts)
                .with_min(Stat::Assists, a.min_ast)
                .with_min(Stat::Rebounds, a.min_reb);
            let games = query::find_games(&rel, &q);
            emit(&cli, &table::games_table(games.iter().copied()), &games, "finder", "")
        }
        Command::Profile { player } => {
            let rel = load(&cli)?;
            let id = resolve_player(&rel, player)?;
            let p = query::player_profile(&rel, id)?;
            if cli.format == OutFormat::Table && cli.out.is_none() {
                println!(
                    "{} ({}) | {} games | {:.1} PTS {:.1} REB {:.1} AST | best GmSc {:.1}",
                    p.player_name, p.team, p.games,
                    p.avg_points, p.avg_rebounds, p.avg_assists, p.best_game_score
                );
                print_table(&table::games_table(&p.last_games));
            }
            emit(&cli, &table::seasons_table(&p), &p, "profile", &p.player_name)
        }
        Command::Versus { left, right } => {
            let rel = load(&cli)?;
            let (l, r) = (resolve_player(&rel, left)?, resolve_player(&rel, right)?);
            let h = query::head_to_head(&rel, l, r)?;
            let subject = format!("{} {}", h.left.player_name, h.right.player_name);
            emit(&cli, &table::versus_table(&h), &h, "versus", &subject)
        }
        Command::Leaders { stat, threshold, limit } => {
            let stat: Stat = stat.parse()?;
            let rel = load(&cli)?;
            let rows = query::hit_leaders_top(&rel, stat, *threshold, *limit)?;
            emit(&cli, &table::leaders_table(&rows), &rows, "leaders", stat.column())
        }
        Command::Records => {
            let rel = load(&cli)?;
            let book = query::record_book(&rel);
            if cli.format == OutFormat::Table && cli.out.is_none() {
                print_table(&table::records_table(&book));
            }
            emit(&cli, &table::games_table(&book.top_performances), &book, "records", "")
        }
        Command::Seasons => {
            let rel = load(&cli)?;
            let seasons = rel.seasons();
            let rows = seasons.iter().map(|s| vec![s.clone()]).collect();
            emit(&cli, &TableData::with(vec![s!("Season")], rows), &seasons, "seasons", "")
        }
    }
}

fn streak_query(a: &StreaksArgs) -> Result<StreakQuery> {
    let group = if a.by_name { GroupKey::PlayerName } else { GroupKey::PlayerId };
    let q = StreakQuery::parse(&a.stat, a.threshold, a.min_length, a.active)?
        .group_by(group)
        .as_of(a.as_of);
    Ok(q)
}

fn load(cli: &Cli) -> Result<RecordRelation> {
    let mut opts = AppOptions::from_env();
    if !cli.data.is_empty() {
        opts.data.paths = cli.data.clone();
    }
    let (rel, report) = store::load_files(&opts.data.paths, opts.data.derive_missing)
        .wrap_err("loading dataset")?;
    logf!(
        "Loaded {} record(s) from {} file(s), {} skipped",
        report.loaded, opts.data.paths.len(), report.skipped
    );
    Ok(rel.filter_seasons(&ingest::expand_seasons(&cli.seasons)))
}

/// Numeric input is an id; anything else is matched against names.
fn resolve_player(rel: &RecordRelation, input: &str) -> Result<u64> {
    let found = match input.trim().parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => rel.find_player(input),
    };
    found.ok_or_else(|| QueryError::UnknownPlayer(s!(input)).into())
}

fn emit<T: Serialize + ?Sized>(
    cli: &Cli,
    table: &TableData,
    value: &T,
    view: &str,
    subject: &str,
) -> Result<()> {
    let export = ExportOptions { format: cli.format.export(), include_headers: !cli.no_headers };

    if let Some(out) = &cli.out {
        let name = file::default_export_name(view, subject, export.format);
        let path = file::resolve_out_path(&out.to_string_lossy(), &name)?;
        match export.format {
            ExportFormat::Json => file::write_json(&path, value)?,
            _ => file::write_table(&path, table, &export)?,
        };
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    let text = match cli.format {
        OutFormat::Table => {
            print_table(table);
            return Ok(());
        }
        OutFormat::Json => serde_json::to_string_pretty(value)?,
        OutFormat::Csv | OutFormat::Tsv => file::to_export_string(table, &export)?,
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

fn print_table(data: &TableData) {
    if data.is_empty() {
        println!("No matches");
        return;
    }
    let mut t = Table::new();
    t.load_preset(UTF8_FULL_CONDENSED);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(data.headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    for row in &data.rows {
        t.add_row(row);
    }
    println!("{t}");
}
