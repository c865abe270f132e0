// src/gui/components/data_table.rs
//
// Draws a TableData. Purely a view; numeric cells are centered,
// text cells left-aligned. An empty table shows "No matches".

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::TableData;

const ROW_H: f32 = 20.0;

fn is_numeric(cell: &str) -> bool {
    let t = cell.trim_end_matches('%');
    !t.is_empty() && t.parse::<f64>().is_ok()
}

pub fn draw(ui: &mut egui::Ui, id_salt: &str, data: &TableData, max_height: f32) {
    if data.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new("No matches").italics().weak());
        return;
    }

    let cols = data.ncols();
    // Column kind from the first row.
    let numeric: Vec<bool> = (0..cols)
        .map(|ci| data.rows.first().and_then(|r| r.get(ci)).is_some_and(|c| is_numeric(c)))
        .collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::horizontal()
        .id_salt((id_salt, "hscroll"))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt((id_salt, cols))
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(max_height);
            for ci in 0..cols {
                let w = if numeric[ci] { 60.0 } else { 140.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(24.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in &data.headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, data.nrows(), |mut row| {
                        let Some(cells) = data.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric[ci] {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
