// src/core/dates.rs
use chrono::{NaiveDate, NaiveDateTime};

/// GAME_DATE cell → date. Accepts "2024-10-22", "2024-10-22T00:00:00",
/// "2024-10-22 00:00:00" and "OCT 22, 2024".
pub fn parse_game_date(cell: &str) -> Option<NaiveDate> {
    let t = cell.trim();
    if t.is_empty() { return None; }

    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") { return Some(d); }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) { return Some(dt.date()); }
    }
    // chrono's %b is case-insensitive
    NaiveDate::parse_from_str(t, "%b %d, %Y").ok()
}
