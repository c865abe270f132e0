// src/gui/mod.rs
pub mod app;
pub mod router;
pub mod pages;
pub mod progress;

mod actions;
mod components;

pub use app::run;
