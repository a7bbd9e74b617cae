mod app;
mod classify;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::{AppConfig, SpamTriageApp};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional first argument: dataset file to load at startup.
    let config = AppConfig {
        dataset_path: std::env::args().nth(1).map(PathBuf::from),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spam Triage – Message Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(SpamTriageApp::new(config)))),
    )
}
