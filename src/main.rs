mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::RankPlotApp;
use eframe::egui;
use state::AppState;

/// Default results file, read from the working directory at startup.
const DEFAULT_RESULTS_FILE: &str = "pagerank_best.txt";

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_RESULTS_FILE);
    if default_path.exists() {
        ui::panels::load_path(&mut state, default_path);
    } else {
        log::info!("No {DEFAULT_RESULTS_FILE} in the working directory, starting empty");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rank Plot – MC Convergence Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(RankPlotApp::new(state)))),
    )
}
