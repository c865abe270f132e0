// src/gui/components/page_view.rs
//
// Lays out the current PageView: metrics, links, chart, tables.

use eframe::egui;
use crate::gui::{app::App, components::{chart, data_table}};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let view = &app.view;

    if !view.metrics.is_empty() || !view.links.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for (label, value) in &view.metrics {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.weak(label);
                        ui.strong(value);
                    });
                });
            }
            for (label, url) in &view.links {
                ui.hyperlink_to(label, url);
            }
        });
        ui.separator();
    }

    egui::ScrollArea::vertical()
        .id_salt("page_view_scroll")
        .show(ui, |ui| {
            if let Some(c) = &view.chart {
                chart::draw(ui, c);
                ui.separator();
            }

            let table_h = if view.secondary.is_some() { 320.0 } else { ui.available_height() };
            data_table::draw(ui, "primary", &view.table, table_h);

            if let Some((title, t)) = &view.secondary {
                ui.separator();
                ui.strong(title);
                data_table::draw(ui, "secondary", t, 320.0);
            }
        });
}
