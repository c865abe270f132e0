// src/config/state.rs
use crate::model::Stat;
use crate::streak::GroupKey;

use super::consts::*;
use super::options::AppOptions;

/// Game Finder controls
#[derive(Clone, Debug)]
pub struct FinderState {
    pub teams: Vec<String>,
    pub min_pts: f64,
    pub min_ast: f64,
    pub min_reb: f64,
}

impl Default for FinderState {
    fn default() -> Self {
        Self { teams: Vec::new(), min_pts: FINDER_MIN_PTS, min_ast: 0.0, min_reb: 0.0 }
    }
}

/// Streak Lab controls
#[derive(Clone, Debug)]
pub struct StreakState {
    pub stat: Stat,
    pub threshold: f64,
    pub min_length: usize,
    pub active_only: bool,
    pub group_by: GroupKey,
    /// Threshold for the hit-count leaderboard chart.
    pub leader_threshold: f64,
}

impl Default for StreakState {
    fn default() -> Self {
        Self {
            stat: Stat::Points,
            threshold: STREAK_DEFAULT_THRESHOLD,
            min_length: STREAK_DEFAULT_MIN_LENGTH,
            active_only: false,
            group_by: GroupKey::PlayerId,
            leader_threshold: STREAK_DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Seasons ticked in the left panel; empty means all
    pub selected_seasons: Vec<String>,

    pub finder: FinderState,
    pub profile_player: Option<u64>,
    pub versus_players: (Option<u64>, Option<u64>),
    pub streaks: StreakState,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn from_env() -> Self {
        Self { options: AppOptions::from_env(), gui: GuiState::default() }
    }
}
