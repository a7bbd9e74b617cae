use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::classify::Label;
use crate::color::style_for;
use crate::data::labeler::label_counts;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Label frequency bar chart (bottom panel)
// ---------------------------------------------------------------------------

/// Render the per-label frequency chart for the loaded dataset.
pub fn label_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Spam Category Distribution");

    if state.labeled.is_empty() {
        ui.weak("No dataset loaded.");
        return;
    }

    let counts = label_counts(&state.labeled);

    // One chart per label so each gets its own legend entry and color.
    let charts: Vec<BarChart> = Label::ALL
        .iter()
        .map(|&label| {
            let style = style_for(label);
            let bar = Bar::new(label.index() as f64, counts[label.index()] as f64)
                .width(0.6)
                .name(label.to_string());
            BarChart::new(vec![bar])
                .name(label.to_string())
                .color(style.background)
        })
        .collect();

    Plot::new("label_chart")
        .legend(Legend::default())
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(|mark, _range| {
            // Integer marks 0..3 carry the label names.
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            Label::ALL
                .get(idx as usize)
                .map(|l| l.to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
