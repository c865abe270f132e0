// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    if app.view.table.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let page = app.current_page();
    let export = &app.state.options.export;
    let default_name = file::default_export_name(
        &page.label().to_ascii_lowercase(),
        &page.export_subject(&app.state.gui),
        export.format,
    );

    logf!(
        "Export: Begin page={:?}, rows={}, format={:?}",
        page.kind(),
        app.view.table.nrows(),
        export.format
    );

    let result = file::resolve_out_path(app.out_path_text.trim(), &default_name)
        .and_then(|path| file::write_table(&path, &app.view.table, export));

    let msg = match result {
        Ok(path) => format!("Exported {}", path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
