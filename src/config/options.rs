// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data: DataOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, overridden by STATPULSE_DATA (comma-separated paths) when set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(v) = std::env::var(DATA_ENV) {
            let paths: Vec<PathBuf> = v
                .split(DATA_ENV_SEP)
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect();
            if !paths.is_empty() {
                opts.data.paths = paths;
            }
        }
        opts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    GameFinder,
    Profile,
    Versus,
    Streaks,
    Records,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    /// Files merged in order; later files win on (player, date).
    pub paths: Vec<PathBuf>,
    /// Compute GAME_SCORE / TS_PCT when the columns are absent.
    pub derive_missing: bool,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(DEFAULT_DATA_FILE)],
            derive_missing: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}
