// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod ingest;
pub mod model;
pub mod store;

pub mod progress;
pub mod query;
pub mod streak;

pub mod file;
pub mod table;

pub mod gui;
#[cfg(feature = "cli")]
pub mod cli;
