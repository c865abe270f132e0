// tests/export.rs
use std::fs;

use chrono::NaiveDate;
use statpulse::config::options::{ExportFormat, ExportOptions};
use statpulse::file;
use statpulse::model::Stat;
use statpulse::streak::Streak;
use statpulse::table::{streaks_table, TableData};

fn sample() -> TableData {
    let streaks = vec![Streak {
        player_id: 203999,
        player_name: "Jokić, Nikola".into(),
        length: 4,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
        average_value: 12.34,
        wins_in_streak: 3,
    }];
    streaks_table(&streaks, Stat::Assists)
}

fn opts(format: ExportFormat, include_headers: bool) -> ExportOptions {
    ExportOptions { format, include_headers }
}

#[test]
fn csv_quotes_fields_with_commas() {
    let text = file::to_export_string(&sample(), &opts(ExportFormat::Csv, true)).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Player,Games,Start,End,Avg AST,Wins"));
    assert_eq!(lines.next(), Some("\"Jokić, Nikola\",4,2025-01-02,2025-01-09,12.3,3"));
}

#[test]
fn tsv_without_headers() {
    let text = file::to_export_string(&sample(), &opts(ExportFormat::Tsv, false)).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("Jokić, Nikola\t4\t"));
}

#[test]
fn json_rows_are_objects() {
    let text = file::to_export_string(&sample(), &opts(ExportFormat::Json, true)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v[0]["Player"], "Jokić, Nikola");
    assert_eq!(v[0]["Wins"], "3");
}

#[test]
fn write_into_directory_uses_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let target = format!("{}/out/", dir.path().display());
    let name = file::default_export_name("streak lab", "AST 10", ExportFormat::Csv);
    let path = file::resolve_out_path(&target, &name).unwrap();
    assert!(path.ends_with("streak_lab_AST_10.csv"));

    let written = file::write_table(&path, &sample(), &opts(ExportFormat::Csv, true)).unwrap();
    let body = fs::read_to_string(written).unwrap();
    assert_eq!(body.lines().count(), 2);
}

#[test]
fn json_view_results_round_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("streaks.json");
    let streaks = vec![Streak {
        player_id: 1,
        player_name: "A".into(),
        length: 2,
        start_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(),
        average_value: 31.5,
        wins_in_streak: 2,
    }];
    file::write_json(&path, &streaks).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v[0]["start_date"], "2024-12-01");
    assert_eq!(v[0]["average_value"], 31.5);
}
