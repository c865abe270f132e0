// src/gui/pages/profile.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::GuiState},
    error::Result,
    progress::Progress,
    query::{player_profile, team_logo_url},
    store::RecordRelation,
    table::{self, fmt1},
};

use super::{or_first_player, player_combo, Catalog, Chart, Page, PageView};

pub struct ProfilePage;
pub static PAGE: ProfilePage = ProfilePage;

impl Page for ProfilePage {
    fn kind(&self) -> PageKind { PageKind::Profile }
    fn label(&self) -> &'static str { "Player Profile" }

    fn draw_controls(&self, ui: &mut egui::Ui, gui: &mut GuiState, catalog: &Catalog) -> bool {
        ui.horizontal(|ui| {
            ui.label("Player:");
            player_combo(ui, "profile_player", &mut gui.profile_player, catalog)
        })
        .inner
    }

    fn build(&self, rel: &RecordRelation, gui: &GuiState, _progress: &mut dyn Progress) -> Result<PageView> {
        let Some(id) = or_first_player(rel, gui.profile_player) else {
            return Ok(PageView::default());
        };
        let p = player_profile(rel, id)?;

        let chart = Chart::Lines {
            title: format!("Last {} games", p.trend.len()),
            series: vec![
                (s!("PTS"), p.trend.iter().map(|t| t.points).collect()),
                (s!("GAME_SCORE"), p.trend.iter().map(|t| t.game_score).collect()),
            ],
        };

        Ok(PageView {
            metrics: vec![
                (s!("Player"), p.player_name.clone()),
                (s!("Team"), p.team.clone()),
                (s!("Games"), p.games.to_string()),
                (s!("PTS"), fmt1(p.avg_points)),
                (s!("REB"), fmt1(p.avg_rebounds)),
                (s!("AST"), fmt1(p.avg_assists)),
                (s!("Best GmSc"), fmt1(p.best_game_score)),
            ],
            links: vec![
                (s!("Headshot"), p.headshot_url.clone()),
                (format!("{} logo", p.team), team_logo_url(&p.team)),
            ],
            chart: Some(chart),
            table: table::games_table(&p.last_games),
            secondary: Some((s!("Season splits"), table::seasons_table(&p))),
        })
    }

    fn export_subject(&self, gui: &GuiState) -> String {
        gui.profile_player.map(|id| id.to_string()).unwrap_or_default()
    }
}
