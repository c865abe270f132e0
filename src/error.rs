// src/error.rs
use thiserror::Error;

/// Rejected query parameters. Raised before any data is scanned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("minimum streak length must be at least 1 (got {0})")]
    MinLength(usize),

    #[error("unknown statistic `{0}`")]
    UnknownStatistic(String),

    #[error("threshold must be a finite number (got {0})")]
    InvalidThreshold(f64),

    #[error("no player matches `{0}`")]
    UnknownPlayer(String),
}

#[derive(Debug, Error)]
pub enum StatError {
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error("query cancelled")]
    Cancelled,

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(String),

    #[error("dataset {0} has no header row")]
    EmptyDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatError>;
