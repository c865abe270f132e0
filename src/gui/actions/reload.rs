// src/gui/actions/reload.rs
//
// Reload reads the data files on a worker thread. The finished relation
// replaces the one in the DatasetHandle in a single swap, so pages keep
// querying the old snapshot until then.

use std::sync::mpsc;
use std::thread;

use eframe::egui;

use crate::{gui::app::App, store};

pub fn reload(app: &mut App, ctx: &egui::Context) {
    if app.reload_rx.is_some() {
        return;
    }
    let paths = app.state.options.data.paths.clone();
    let derive = app.state.options.data.derive_missing;
    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();

    logf!("Reload: Begin ({} file(s))", paths.len());
    app.status("Reloading…");

    thread::spawn(move || {
        let res = store::load_files(&paths, derive);
        let _ = tx.send(res);
        ctx.request_repaint();
    });
    app.reload_rx = Some(rx);
}

/// Called every frame; applies a finished reload.
pub fn poll_reload(app: &mut App) {
    let Some(rx) = &app.reload_rx else { return };
    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            app.reload_rx = None;
            app.status("Reload failed");
            return;
        }
    };
    app.reload_rx = None;

    match res {
        Ok((rel, report)) => {
            logf!("Reload: OK loaded={} skipped={}", report.loaded, report.skipped);
            app.dataset.replace(rel);
            app.refresh_catalog();
            app.status(format!("Loaded {} game(s), {} skipped", report.loaded, report.skipped));
        }
        Err(e) => {
            loge!("Reload: Error: {}", e);
            app.status(format!("Reload error: {e}"));
        }
    }
}
