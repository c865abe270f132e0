// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::sanitize_filename;
use crate::csv::rows_to_string;
use crate::error::Result;
use crate::table::TableData;

/// Render a table in the chosen export format.
pub fn to_export_string(table: &TableData, export: &ExportOptions) -> Result<String> {
    match export.format.delim() {
        Some(sep) => Ok(rows_to_string(&table.headers, &table.rows, export.include_headers, sep)),
        None => Ok(serde_json::to_string_pretty(&table.to_json())?),
    }
}

/// Write a table to `path`, creating parent directories as needed.
/// Returns the path written to.
pub fn write_table(path: &Path, table: &TableData, export: &ExportOptions) -> Result<PathBuf> {
    let contents = to_export_string(table, export)?;
    write_contents(path, &contents)?;
    logf!("Export: {} row(s) → {}", table.nrows(), path.display());
    Ok(path.to_path_buf())
}

/// Serialize any view result as pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    let contents = serde_json::to_string_pretty(value)?;
    write_contents(path, &contents)?;
    Ok(path.to_path_buf())
}

fn write_contents(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

/// "streaks" + "PTS 30" → "streaks_PTS_30.csv"
pub fn default_export_name(view: &str, subject: &str, format: ExportFormat) -> String {
    let stem = sanitize_filename(&format!("{view} {subject}"), view);
    format!("{stem}.{}", format.ext())
}

/// Empty → default file; a directory (or a trailing separator) → default file inside it.
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_names() {
        assert_eq!(
            default_export_name("streaks", "PTS 30", ExportFormat::Tsv),
            "streaks_PTS_30.tsv"
        );
        assert_eq!(default_export_name("records", "", ExportFormat::Json), "records.json");
    }

    #[test]
    fn dir_hints() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(!looks_like_dir_hint(Path::new("out.csv")));
    }
}
