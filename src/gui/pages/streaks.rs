// src/gui/pages/streaks.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::GuiState},
    error::Result,
    model::Stat,
    progress::Progress,
    query::hit_leaders,
    store::RecordRelation,
    streak::{find_streaks_with, GroupKey, StreakQuery},
    table,
};

use super::{Catalog, Chart, Page, PageView};

pub struct StreaksPage;
pub static PAGE: StreaksPage = StreaksPage;

impl StreaksPage {
    fn query(gui: &GuiState) -> StreakQuery {
        let s = &gui.streaks;
        StreakQuery::new(s.stat, s.threshold)
            .min_length(s.min_length)
            .active_only(s.active_only)
            .group_by(s.group_by)
    }
}

impl Page for StreaksPage {
    fn kind(&self) -> PageKind { PageKind::Streaks }
    fn label(&self) -> &'static str { "Streak Lab" }

    fn draw_controls(&self, ui: &mut egui::Ui, gui: &mut GuiState, _catalog: &Catalog) -> bool {
        let s = &mut gui.streaks;
        let mut changed = false;

        ui.horizontal_wrapped(|ui| {
            ui.label("Stat:");
            let before = s.stat;
            egui::ComboBox::from_id_salt("streak_stat")
                .selected_text(s.stat.label())
                .show_ui(ui, |ui| {
                    for st in Stat::ALL {
                        ui.selectable_value(&mut s.stat, st, st.label());
                    }
                });
            changed |= s.stat != before;

            ui.label("Threshold:");
            changed |= ui.add(egui::DragValue::new(&mut s.threshold).speed(0.5)).changed();

            ui.label("Min games:");
            changed |= ui.add(egui::DragValue::new(&mut s.min_length).range(1..=82)).changed();

            changed |= ui.checkbox(&mut s.active_only, "Active only").changed();

            ui.separator();
            changed |= ui.radio_value(&mut s.group_by, GroupKey::PlayerId, "By id").changed();
            changed |= ui.radio_value(&mut s.group_by, GroupKey::PlayerName, "By name").changed();

            ui.separator();
            ui.label("Leaderboard ≥");
            changed |= ui.add(egui::DragValue::new(&mut s.leader_threshold).speed(0.5)).changed();
        });

        if changed {
            logd!(
                "UI: Streak Lab → {} >= {} (min {}, active={}, {:?})",
                s.stat, s.threshold, s.min_length, s.active_only, s.group_by
            );
        }
        changed
    }

    fn build(&self, rel: &RecordRelation, gui: &GuiState, progress: &mut dyn Progress) -> Result<PageView> {
        let q = Self::query(gui);
        let streaks = find_streaks_with(rel.records(), &q, progress)?;

        let leaders = hit_leaders(rel, q.statistic, gui.streaks.leader_threshold)?;
        let bars = leaders
            .iter()
            .map(|r| (r.player_name.clone(), r.hits as f64))
            .collect();

        let longest = streaks.first().map(|s| s.length).unwrap_or(0);
        let active = if q.active_only { "active " } else { "" };
        Ok(PageView {
            metrics: vec![
                (format!("{active}streaks"), streaks.len().to_string()),
                (s!("Longest"), longest.to_string()),
            ],
            chart: Some(Chart::Bars {
                title: format!("Games with {} ≥ {}", q.statistic, gui.streaks.leader_threshold),
                bars,
            }),
            table: table::streaks_table(&streaks, q.statistic),
            secondary: Some((s!("Leaderboard"), table::leaders_table(&leaders))),
            ..PageView::default()
        })
    }

    fn export_subject(&self, gui: &GuiState) -> String {
        format!("{} {}", gui.streaks.stat, gui.streaks.threshold)
    }
}
