// src/core/mod.rs

pub mod dates;
pub mod matchup;
pub mod sanitize;
