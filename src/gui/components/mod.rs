// src/gui/components/mod.rs
pub mod chart;
pub mod data_table;
pub mod export_bar;
pub mod page_view;
pub mod season_panel;
pub mod tabs;
