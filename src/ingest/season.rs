// src/ingest/season.rs
//
// Season labels in the provider's "2024-25" form. A season starts in
// October, so Oct..Dec belong to the season starting that year.

use chrono::{Datelike, NaiveDate};

use crate::config::consts::SEASON_START_MONTH;

/// 2024 → "2024-25"
pub fn season_label(start_year: i32) -> String {
    let next = (start_year + 1).rem_euclid(100);
    format!("{start_year}-{next:02}")
}

pub fn season_start_year(date: NaiveDate) -> i32 {
    if date.month() >= SEASON_START_MONTH { date.year() } else { date.year() - 1 }
}

/// Season a game on `date` belongs to.
pub fn season_for_date(date: NaiveDate) -> String {
    season_label(season_start_year(date))
}

/// Labels for every season starting in `first..=last`, oldest first.
pub fn season_range(first: i32, last: i32) -> Vec<String> {
    (first..=last).map(season_label).collect()
}

/// "2024-25" (or a bare "2024") → 2024.
pub fn season_start_from_label(label: &str) -> Option<i32> {
    let head = label.trim().split('-').next()?;
    if head.len() != 4 {
        return None;
    }
    head.parse().ok()
}

/// Expands "2021-22..2023-24" style ranges; other entries pass through.
/// A range whose ends don't parse is kept as written.
pub fn expand_seasons(inputs: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for input in inputs {
        let expanded = input.split_once("..").and_then(|(a, b)| {
            Some(season_range(season_start_from_label(a)?, season_start_from_label(b)?))
        });
        for season in expanded.unwrap_or_else(|| vec![input.trim().to_string()]) {
            if !out.contains(&season) {
                out.push(season);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn labels_wrap_century() {
        assert_eq!(season_label(2024), "2024-25");
        assert_eq!(season_label(1999), "1999-00");
        assert_eq!(season_label(2008), "2008-09");
    }

    #[test]
    fn october_starts_a_season() {
        assert_eq!(season_for_date(d(2024, 10, 1)), "2024-25");
        assert_eq!(season_for_date(d(2024, 12, 31)), "2024-25");
        assert_eq!(season_for_date(d(2025, 1, 1)), "2024-25");
        assert_eq!(season_for_date(d(2025, 6, 20)), "2024-25");
        assert_eq!(season_for_date(d(2024, 9, 30)), "2023-24");
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        assert_eq!(season_range(2000, 2002), vec!["2000-01", "2001-02", "2002-03"]);
        assert!(season_range(2005, 2004).is_empty());
    }

    #[test]
    fn season_ranges_expand_in_filters() {
        let input = vec![s!("2021-22..2023-24"), s!("2022-23"), s!("2019-20")];
        assert_eq!(expand_seasons(&input), vec!["2021-22", "2022-23", "2023-24", "2019-20"]);

        assert_eq!(expand_seasons(&[s!("2024..2025")]), vec!["2024-25", "2025-26"]);
        assert_eq!(expand_seasons(&[s!("x..2025-26")]), vec!["x..2025-26"]);
        assert_eq!(season_start_from_label("99-00"), None);
    }
}
