use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels, table};

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Explicit startup configuration, built in `main` from the CLI.
#[derive(Debug, Default)]
pub struct AppConfig {
    /// Dataset to load before the first frame (optional).
    pub dataset_path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpamTriageApp {
    pub state: AppState,
}

impl SpamTriageApp {
    pub fn new(config: AppConfig) -> Self {
        let mut state = AppState::default();
        if let Some(path) = &config.dataset_path {
            state.load_path(path);
        }
        Self { state }
    }
}

impl eframe::App for SpamTriageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: message checker ----
        egui::SidePanel::left("checker_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::checker_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: label frequency chart ----
        egui::TopBottomPanel::bottom("chart_panel")
            .default_height(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                chart::label_chart(ui, &self.state);
            });

        // ---- Central panel: labeled dataset preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::preview_table(ui, &self.state);
        });
    }
}
