// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    error::Result,
    ingest::LoadReport,
    store::{self, DatasetHandle, RecordRelation},
};

use super::{
    components,
    pages::{Catalog, Page, PageView},
    progress::GuiProgress,
    router,
};

pub fn run(options: eframe::NativeOptions) -> std::result::Result<(), Box<dyn Error>> {
    eframe::run_native(
        "StatPulse",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_env())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for controls (UI thread only)
    pub state: AppState,

    // full relation; swapped whole on reload
    pub dataset: Arc<DatasetHandle>,
    // season-filtered snapshot the pages query
    pub view_rel: Arc<RecordRelation>,

    // pick lists
    pub seasons: Vec<String>,
    pub teams: Vec<String>,
    pub players: Vec<(u64, String)>,
    pub last_clicked: Option<usize>,

    // current page output
    pub view: PageView,
    pub dirty: bool,

    pub out_path_text: String,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub reload_rx: Option<Receiver<Result<(RecordRelation, LoadReport)>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let data = &state.options.data;
        let (rel, status) = match store::load_files(&data.paths, data.derive_missing) {
            Ok((rel, report)) => {
                logf!(
                    "Init: loaded={} skipped={} from {} file(s)",
                    report.loaded, report.skipped, data.paths.len()
                );
                let msg = format!("Loaded {} game(s)", report.loaded);
                (rel, msg)
            }
            Err(e) => {
                loge!("Init: Load failed: {}", e);
                (RecordRelation::empty(), format!("No data: {e}"))
            }
        };

        let dataset = Arc::new(DatasetHandle::new(rel));
        let view_rel = dataset.snapshot();

        let mut app = Self {
            state,
            dataset,
            view_rel,
            seasons: Vec::new(),
            teams: Vec::new(),
            players: Vec::new(),
            last_clicked: None,
            view: PageView::default(),
            dirty: true,
            out_path_text: s!(),
            status: Arc::new(Mutex::new(status)),
            reload_rx: None,
        };
        app.refresh_catalog();
        logf!("Init: seasons={}, default page={:?}", app.seasons.len(), app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Season list from the full relation; drops selections that no longer exist.
    pub fn refresh_catalog(&mut self) {
        let full = self.dataset.snapshot();
        self.seasons = full.seasons();
        let seasons = &self.seasons;
        self.state.gui.selected_seasons.retain(|s| seasons.contains(s));
        self.last_clicked = None;
        self.refilter();
    }

    /// Re-apply the season filter to the latest snapshot.
    pub fn refilter(&mut self) {
        let full = self.dataset.snapshot();
        self.view_rel = Arc::new(full.filter_seasons(&self.state.gui.selected_seasons));
        self.teams = self.view_rel.teams();
        self.players = self.view_rel.players();
        self.dirty = true;
    }

    /// Re-run the current page's query.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        let mut prog = GuiProgress::new(self.status.clone());
        let t = std::time::Instant::now();

        match page.build(&self.view_rel, &self.state.gui, &mut prog) {
            Ok(view) => {
                logd!(
                    "View: {:?} rows={} in {:?}",
                    page.kind(), view.table.nrows(), t.elapsed()
                );
                self.view = view;
            }
            Err(e) => {
                loge!("View: {:?} failed: {}", page.kind(), e);
                self.status(format!("Error: {e}"));
                self.view = PageView::default();
            }
        }
        self.dirty = false;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll_reload(self);

        egui::SidePanel::left("seasons")
            .resizable(false)
            .show(ctx, |ui| {
                components::season_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            let catalog = Catalog { teams: &self.teams, players: &self.players };
            if page.draw_controls(ui, &mut self.state.gui, &catalog) {
                self.dirty = true;
            }

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            if self.dirty {
                self.rebuild_view();
            }
            components::page_view::draw(ui, self);
        });
    }
}
