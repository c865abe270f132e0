// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use statpulse::{config::consts::DEFAULT_LOG_LEVEL, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init_file(DEFAULT_LOG_LEVEL);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("StatPulse")
            .with_inner_size([1200.0, 760.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        ::tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
