// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Numeric cell → f64. Blank, non-numeric and non-finite cells become 0.
/// "MIN" may arrive as "34:12"; that reads as fractional minutes.
pub fn coerce_f64(cell: &str) -> f64 {
    let t = cell.trim();
    if let Some((m, s)) = t.split_once(':') {
        return match (m.trim().parse::<f64>(), s.trim().parse::<f64>()) {
            (Ok(m), Ok(s)) if m.is_finite() && s.is_finite() => m + s / 60.0,
            _ => 0.0,
        };
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Ids may be written as floats ("2544.0") by spreadsheet round-trips.
pub fn parse_id(cell: &str) -> Option<u64> {
    let t = cell.trim();
    if let Ok(v) = t.parse::<u64>() { return Some(v); }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 => Some(v as u64),
        _ => None,
    }
}

/// Player name → safe file stem ("Luka Dončić" → "Luka_Dončić").
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_treats_garbage_as_zero() {
        assert_eq!(coerce_f64("31"), 31.0);
        assert_eq!(coerce_f64(" 0.612 "), 0.612);
        assert_eq!(coerce_f64(""), 0.0);
        assert_eq!(coerce_f64("DNP"), 0.0);
        assert_eq!(coerce_f64("NaN"), 0.0);
        assert_eq!(coerce_f64("inf"), 0.0);
    }

    #[test]
    fn coerce_reads_clock_minutes() {
        assert_eq!(coerce_f64("34:30"), 34.5);
        assert_eq!(coerce_f64("34:xx"), 0.0);
    }

    #[test]
    fn parse_id_accepts_float_spelling() {
        assert_eq!(parse_id("2544"), Some(2544));
        assert_eq!(parse_id("2544.0"), Some(2544));
        assert_eq!(parse_id("25.5"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn sanitize_filename_collapses_separators() {
        assert_eq!(sanitize_filename("  LeBron   James ", "x"), "LeBron_James");
        assert_eq!(sanitize_filename("Shai Gilgeous-Alexander", "x"), "Shai_Gilgeous-Alexander");
        assert_eq!(sanitize_filename("???", "player_1"), "player_1");
        assert_eq!(normalize_ws(" a \t b\n"), "a b");
    }
}
