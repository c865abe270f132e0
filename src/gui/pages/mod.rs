// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::GuiState},
    error::Result,
    progress::Progress,
    store::RecordRelation,
    table::TableData,
};

pub mod finder;
pub mod profile;
pub mod records;
pub mod streaks;
pub mod versus;

/// Lists the pages pick from (teams, players) for the current relation.
pub struct Catalog<'a> {
    pub teams: &'a [String],
    pub players: &'a [(u64, String)],
}

impl Catalog<'_> {
    pub fn player_name(&self, id: u64) -> Option<&str> {
        self.players.iter().find(|(pid, _)| *pid == id).map(|(_, n)| n.as_str())
    }
}

#[derive(Clone, Debug)]
pub enum Chart {
    /// Horizontal bars, one per label.
    Bars { title: String, bars: Vec<(String, f64)> },
    /// Series drawn over the same x axis (oldest first).
    Lines { title: String, series: Vec<(String, Vec<f64>)> },
}

/// Everything a page shows for the current controls.
#[derive(Clone, Debug, Default)]
pub struct PageView {
    /// Headline numbers above the table.
    pub metrics: Vec<(String, String)>,
    /// (label, url)
    pub links: Vec<(String, String)>,
    pub chart: Option<Chart>,
    pub table: TableData,
    pub secondary: Option<(String, TableData)>,
}

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw page-specific controls. Returns true when any of them changed.
    fn draw_controls(&self, _ui: &mut egui::Ui, _gui: &mut GuiState, _catalog: &Catalog) -> bool {
        false
    }

    /// Run the page's query against `rel`.
    fn build(
        &self,
        rel: &RecordRelation,
        gui: &GuiState,
        progress: &mut dyn Progress,
    ) -> Result<PageView>;

    /// Default file stem for Export.
    fn export_subject(&self, _gui: &GuiState) -> String {
        s!()
    }
}

/// Player picker shared by Profile and Head-to-Head.
pub(super) fn player_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    selected: &mut Option<u64>,
    catalog: &Catalog,
) -> bool {
    let text = selected
        .and_then(|id| catalog.player_name(id))
        .unwrap_or("Select player");
    let before = *selected;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(text)
        .width(200.0)
        .show_ui(ui, |ui| {
            for (id, name) in catalog.players {
                ui.selectable_value(selected, Some(*id), name);
            }
        });
    *selected != before
}

/// First listed player when nothing is picked yet.
pub(super) fn or_first_player(rel: &RecordRelation, picked: Option<u64>) -> Option<u64> {
    picked.or_else(|| rel.players().first().map(|(id, _)| *id))
}
