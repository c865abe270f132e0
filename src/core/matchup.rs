// src/core/matchup.rs
//
// Provider matchup strings:
//   "LAL vs. BOS" → LAL at home against BOS
//   "LAL @ BOS"   → LAL away at BOS

use crate::model::Location;

use super::sanitize::normalize_ws;

/// Returns (location, opponent). None when neither marker is present.
pub fn parse_matchup(matchup: &str) -> Option<(Location, String)> {
    let m = normalize_ws(matchup);

    let (loc, rest) = if let Some(i) = m.find(" vs. ") {
        (Location::Home, &m[i + " vs. ".len()..])
    } else if let Some(i) = m.find(" vs ") {
        (Location::Home, &m[i + " vs ".len()..])
    } else if let Some(i) = m.find('@') {
        (Location::Away, &m[i + 1..])
    } else {
        return None;
    };

    let opp = rest.trim();
    if opp.is_empty() { None } else { Some((loc, opp.to_string())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_and_away_markers() {
        assert_eq!(parse_matchup("LAL vs. BOS"), Some((Location::Home, s!("BOS"))));
        assert_eq!(parse_matchup("LAL @ BOS"), Some((Location::Away, s!("BOS"))));
        assert_eq!(parse_matchup("LAL@BOS"), Some((Location::Away, s!("BOS"))));
        assert_eq!(parse_matchup("  GSW   vs   DEN "), Some((Location::Home, s!("DEN"))));
    }

    #[test]
    fn unparseable_matchups() {
        assert_eq!(parse_matchup(""), None);
        assert_eq!(parse_matchup("LAL BOS"), None);
        assert_eq!(parse_matchup("LAL @ "), None);
    }
}
