use eframe::egui::{self, Color32, RichText, Ui};

use crate::classify::Label;
use crate::color::style_for;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} messages loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – message checker
// ---------------------------------------------------------------------------

/// Render the single-message checker panel.
pub fn checker_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Check a Message");
    ui.separator();

    ui.label("Enter your message:");
    let input = ui.add(
        egui::TextEdit::singleline(&mut state.query)
            .hint_text("e.g. win a free vacation")
            .desired_width(f32::INFINITY),
    );

    let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if ui.button("Predict").clicked() || submitted {
        state.run_checker();
    }

    ui.add_space(8.0);

    if let Some(label) = state.verdict {
        verdict_banner(ui, label);
    }
}

/// One-line color-coded verdict matching the table's label styling.
fn verdict_banner(ui: &mut Ui, label: Label) {
    let style = style_for(label);
    let message = match label {
        Label::Spam => "SPAM DETECTED!",
        Label::LessSpam => "LESS SPAM POSSIBLE",
        Label::NotSpam => "NOT SPAM",
    };

    egui::Frame::new()
        .fill(style.background)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .corner_radius(4)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(style.text).strong());
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open message dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
