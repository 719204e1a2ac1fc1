use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::METHOD_LABELS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – method visibility toggles
// ---------------------------------------------------------------------------

/// Render the left method panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Methods");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No results loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all();
        }
        if ui.small_button("None").clicked() {
            state.hide_all();
        }
    });
    ui.add_space(4.0);

    // Collect first so we can mutate state inside the loop.
    let entries: Vec<(&'static str, Color32)> = state.colors.entries().collect();

    for (idx, (label, color)) in entries.into_iter().enumerate() {
        let text = RichText::new(label).color(color);
        let mut checked = state.visible[idx];
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_method(idx);
        }
    }
}

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
            let shown = state.visible.iter().filter(|v| **v).count();
            ui.label(format!(
                "{} sample sizes loaded, {shown}/{} methods shown",
                ds.len(),
                METHOD_LABELS.len()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.log_scale, "Log scale")
            .clicked()
        {
            state.log_scale = !state.log_scale;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Load a results file into the state.
///
/// A failed load keeps the previously loaded dataset and surfaces the
/// diagnostic in the status bar and the log.
pub fn load_path(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} sample sizes from {}",
                dataset.len(),
                path.display()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load results: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open results file")
        .add_filter("Results", &["txt"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}
