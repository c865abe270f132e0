// src/gui/pages/finder.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::GuiState},
    error::Result,
    model::Stat,
    progress::Progress,
    query::{find_games, FinderQuery},
    store::RecordRelation,
    table,
};

use super::{Catalog, Page, PageView};

pub struct FinderPage;
pub static PAGE: FinderPage = FinderPage;

impl FinderPage {
    fn query(gui: &GuiState) -> FinderQuery {
        let f = &gui.finder;
        FinderQuery { teams: f.teams.clone(), ..FinderQuery::default() }
            .with_min(Stat::Points, f.min_pts)
            .with_min(Stat::Assists, f.min_ast)
            .with_min(Stat::Rebounds, f.min_reb)
    }
}

impl Page for FinderPage {
    fn kind(&self) -> PageKind { PageKind::GameFinder }
    fn label(&self) -> &'static str { "Game Finder" }

    fn draw_controls(&self, ui: &mut egui::Ui, gui: &mut GuiState, catalog: &Catalog) -> bool {
        let f = &mut gui.finder;
        let mut changed = false;

        ui.horizontal_wrapped(|ui| {
            let text = match f.teams.len() {
                0 => s!("All teams"),
                1 => f.teams[0].clone(),
                n => format!("{n} teams"),
            };
            ui.label("Teams:");
            egui::ComboBox::from_id_salt("finder_teams")
                .selected_text(text)
                .show_ui(ui, |ui| {
                    if ui.button("Clear").clicked() {
                        f.teams.clear();
                        changed = true;
                    }
                    for t in catalog.teams {
                        let mut on = f.teams.contains(t);
                        if ui.checkbox(&mut on, t).changed() {
                            if on { f.teams.push(t.clone()); } else { f.teams.retain(|x| x != t); }
                            changed = true;
                        }
                    }
                });

            for (label, v) in [("Min PTS", &mut f.min_pts), ("Min AST", &mut f.min_ast), ("Min REB", &mut f.min_reb)] {
                ui.label(label);
                changed |= ui.add(egui::DragValue::new(v).speed(1.0).range(0.0..=100.0)).changed();
            }
        });

        if changed {
            logd!("UI: Finder → teams={:?} pts={} ast={} reb={}", f.teams, f.min_pts, f.min_ast, f.min_reb);
        }
        changed
    }

    fn build(&self, rel: &RecordRelation, gui: &GuiState, _progress: &mut dyn Progress) -> Result<PageView> {
        let q = Self::query(gui);
        let games = find_games(rel, &q);
        Ok(PageView {
            metrics: vec![(s!("Matches"), games.len().to_string())],
            table: table::games_table(games.iter().copied()),
            ..PageView::default()
        })
    }

    fn export_subject(&self, gui: &GuiState) -> String {
        format!("PTS {}", gui.finder.min_pts)
    }
}
