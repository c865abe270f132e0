// src/gui/pages/versus.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::GuiState},
    error::Result,
    progress::Progress,
    query::head_to_head,
    store::RecordRelation,
    table,
};

use super::{player_combo, Catalog, Chart, Page, PageView};

pub struct VersusPage;
pub static PAGE: VersusPage = VersusPage;

impl Page for VersusPage {
    fn kind(&self) -> PageKind { PageKind::Versus }
    fn label(&self) -> &'static str { "Head-to-Head" }

    fn draw_controls(&self, ui: &mut egui::Ui, gui: &mut GuiState, catalog: &Catalog) -> bool {
        let (left, right) = &mut gui.versus_players;
        ui.horizontal(|ui| {
            let mut changed = player_combo(ui, "versus_left", left, catalog);
            ui.label("vs");
            changed |= player_combo(ui, "versus_right", right, catalog);
            changed
        })
        .inner
    }

    fn build(&self, rel: &RecordRelation, gui: &GuiState, _progress: &mut dyn Progress) -> Result<PageView> {
        let (Some(l), Some(r)) = gui.versus_players else {
            return Ok(PageView::default());
        };
        let h = head_to_head(rel, l, r)?;

        let bars = h
            .rows()
            .flat_map(|(stat, lv, rv)| {
                [
                    (format!("{} {}", h.left.player_name, stat), lv),
                    (format!("{} {}", h.right.player_name, stat), rv),
                ]
            })
            .collect();

        Ok(PageView {
            metrics: vec![
                (format!("{} games", h.left.player_name), h.left.games.to_string()),
                (format!("{} games", h.right.player_name), h.right.games.to_string()),
            ],
            chart: Some(Chart::Bars { title: s!("Career means"), bars }),
            table: table::versus_table(&h),
            ..PageView::default()
        })
    }

    fn export_subject(&self, gui: &GuiState) -> String {
        match gui.versus_players {
            (Some(l), Some(r)) => format!("{l} {r}"),
            _ => s!(),
        }
    }
}
