// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.table.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    match file::to_export_string(&app.view.table, &app.state.options.export) {
        Ok(txt) => {
            logf!(
                "Copy: page={:?}, rows={}, format={:?}",
                app.current_page_kind(),
                app.view.table.nrows(),
                app.state.options.export.format
            );
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
