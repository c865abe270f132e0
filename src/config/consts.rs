// src/config/consts.rs

// Data sources
pub const DEFAULT_DATA_FILE: &str = "nba_data_live.csv";
pub const DATA_ENV: &str = "STATPULSE_DATA";
pub const DATA_ENV_SEP: char = ',';

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "STATPULSE_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Seasons start in October
pub const SEASON_START_MONTH: u32 = 10;

// Views
pub const FINDER_LIMIT: usize = 50;
pub const FINDER_MIN_PTS: f64 = 30.0;
pub const PROFILE_LAST_GAMES: usize = 5;
pub const PROFILE_TREND_GAMES: usize = 50;
pub const LEADERBOARD_SIZE: usize = 10;
pub const TOP_PERFORMANCES: usize = 20;

// Streak Lab defaults
pub const STREAK_DEFAULT_THRESHOLD: f64 = 30.0;
pub const STREAK_DEFAULT_MIN_LENGTH: usize = 2;

// External assets
pub const HEADSHOT_URL: &str =
    "https://ak-static.cms.nba.com/wp-content/uploads/headshots/nba/latest/260x190";
pub const TEAM_LOGO_URL: &str = "https://assets.sportsdata.io/assets/nba/logos";
