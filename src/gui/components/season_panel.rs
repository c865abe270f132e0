// src/gui/components/season_panel.rs
//
// Left panel: season filter. Click selects one season, ctrl-click toggles,
// shift-click selects a range. An empty selection means every season.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Seasons");

    let mut changed = false;
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_seasons.clear();
            changed = true;
        }
        if ui.button("Latest").clicked() {
            app.state.gui.selected_seasons = app.seasons.first().cloned().into_iter().collect();
            changed = true;
        }
    });

    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("season_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let all = app.state.gui.selected_seasons.is_empty();
            for (idx, season) in app.seasons.iter().enumerate() {
                let is_selected = all || app.state.gui.selected_seasons.contains(season);
                if !ui.selectable_label(is_selected, season).clicked() {
                    continue;
                }

                let mods = ui.input(|i| i.modifiers);
                let sel = &mut app.state.gui.selected_seasons;
                match (mods.ctrl, mods.shift, app.last_clicked) {
                    (_, true, Some(last)) => {
                        let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                        *sel = app.seasons[lo..=hi].to_vec();
                    }
                    (true, _, _) => {
                        if all {
                            // Toggling off one of "all" keeps the rest.
                            *sel = app.seasons.iter().filter(|s| *s != season).cloned().collect();
                        } else if is_selected {
                            sel.retain(|s| s != season);
                        } else {
                            sel.push(season.clone());
                        }
                    }
                    _ => *sel = vec![season.clone()],
                }
                app.last_clicked = Some(idx);
                changed = true;
            }
        });

    if changed {
        logf!("UI: Seasons → {:?}", app.state.gui.selected_seasons);
        app.refilter();
    }
}
