// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }

        let before_headers = export.include_headers;
        ui.add_enabled(
            export.format != ExportFormat::Json,
            egui::Checkbox::new(&mut export.include_headers, "Include headers"),
        );
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();
        ui.label("Output:");
        ui.add(
            egui::TextEdit::singleline(&mut app.out_path_text)
                .hint_text("file or folder (default: current dir)")
                .font(egui::TextStyle::Monospace)
                .desired_width(220.0),
        );
    });

    // --- Actions (Copy / Export / Reload) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }

        ui.separator();

        let reloading = app.reload_rx.is_some();
        if ui.add_enabled(!reloading, egui::Button::new("Reload data")).clicked() {
            actions::reload(app, ui.ctx());
        }
        if reloading {
            ui.add(egui::widgets::Spinner::new());
        }

        ui.separator();
        ui.label(app.status_text());
    });
}
