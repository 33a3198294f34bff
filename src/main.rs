mod app;
mod color;
mod data;
mod state;
mod ui;

use app::RustyAtlasApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Atlas – 2022 Economic Freedom Index",
        options,
        Box::new(|_cc| {
            let app = RustyAtlasApp::default();
            log::info!(
                "Loaded embedded dataset: {} countries",
                app.state.dataset.len()
            );
            Ok(Box::new(app))
        }),
    )
}
