mod app;
mod data;
mod export;
mod severity;
mod state;
mod ui;

use std::path::Path;

use app::LosViewerApp;
use data::loader::DEFAULT_DATASET_PATH;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([520.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Levels of Service",
        options,
        // The dataset is loaded before the first frame is drawn.
        Box::new(|_cc| Ok(Box::new(LosViewerApp::new(Path::new(DEFAULT_DATASET_PATH))))),
    )
}
