mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::ReelboardApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();

    // Optional catalog path on the command line, loaded before the UI
    // starts.  A failure here is fatal: no partial dashboard.
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match data::loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} titles ({} types, {} countries)",
                    catalog.len(),
                    catalog.kinds.len(),
                    catalog.countries.len()
                );
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reelboard – Catalog Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(ReelboardApp { state }))),
    )
}
