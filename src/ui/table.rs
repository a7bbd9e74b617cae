use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::style_for;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dataset preview table (central panel)
// ---------------------------------------------------------------------------

/// Render the labeled dataset preview with a color-coded status column.
pub fn preview_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to preview messages  (File → Open…)");
            });
            return;
        }
    };

    let extra_columns = &dataset.extra_columns;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::remainder().at_least(200.0))
        .columns(Column::auto().at_least(60.0), extra_columns.len())
        .column(Column::auto().at_least(90.0))
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("text");
            });
            for col in extra_columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(col);
                });
            }
            header.col(|ui: &mut Ui| {
                ui.strong("status");
            });
        })
        .body(|body| {
            body.rows(20.0, state.labeled.len(), |mut row| {
                let labeled = &state.labeled[row.index()];

                row.col(|ui: &mut Ui| {
                    match &labeled.message.text {
                        Some(text) => ui.label(text),
                        None => ui.weak("<empty>"),
                    };
                });

                for col in extra_columns {
                    row.col(|ui: &mut Ui| {
                        let value = labeled
                            .message
                            .extra
                            .get(col)
                            .map(String::as_str)
                            .unwrap_or("");
                        ui.label(value);
                    });
                }

                row.col(|ui: &mut Ui| {
                    let style = style_for(labeled.label);
                    ui.label(
                        RichText::new(labeled.label.to_string())
                            .color(style.text)
                            .background_color(style.background),
                    );
                });
            });
        });
}
