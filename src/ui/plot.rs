use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Convergence plot (central panel)
// ---------------------------------------------------------------------------

/// Render the convergence plot in the central panel.
///
/// Records sit at integer x positions in file order; the axis formatter
/// names each tick after the record's sample-size token.
pub fn convergence_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a results file to view convergence  (File → Open…)");
            });
            return;
        }
    };

    let tick_labels = dataset.labels.clone();
    let log_scale = state.log_scale;

    let mut plot = Plot::new("convergence_plot")
        .legend(Legend::default())
        .x_axis_label("Sample size N")
        .y_axis_label(if log_scale {
            "Squared error (log10)"
        } else {
            "Squared error"
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .x_axis_formatter(move |mark, _range| {
            // Only integer gridlines carry a record; leave the rest blank.
            let pos = mark.value;
            if pos < 0.0 || (pos - pos.round()).abs() > 1e-6 {
                return String::new();
            }
            tick_labels
                .get(pos.round() as usize)
                .cloned()
                .unwrap_or_default()
        });

    if log_scale {
        plot = plot.y_axis_formatter(|mark, _range| format!("1e{:.0}", mark.value));
    }

    plot.show(ui, |plot_ui| {
        for (idx, series) in dataset.series.iter().enumerate() {
            if !state.visible[idx] {
                continue;
            }

            let points: PlotPoints = series
                .values
                .iter()
                .enumerate()
                .filter_map(|(i, &v)| {
                    if log_scale {
                        // log10 is undefined at zero; drop those points.
                        (v > 0.0).then(|| [i as f64, v.log10()])
                    } else {
                        Some([i as f64, v])
                    }
                })
                .collect();

            let line = Line::new(points)
                .name(series.name)
                .color(state.colors.color_at(idx))
                .width(1.5);

            plot_ui.line(line);
        }
    });
}
