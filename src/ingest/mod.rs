// src/ingest/mod.rs
//! Ingestion: provider game logs → `GameRecord`s.
//!
//! Fetching from the provider happens elsewhere; this module starts from the
//! CSV it writes. It owns everything that shapes raw rows into records:
//! numeric coercion, matchup parsing, season labels and the derived metrics
//! (true shooting, game score). The streak engine and the views only ever
//! read the finished columns.

pub mod derive;
pub mod loader;
pub mod season;

pub use loader::{parse_records, LoadReport, REQUIRED_COLUMNS};
pub use season::{expand_seasons, season_for_date, season_label, season_range};
