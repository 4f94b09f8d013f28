//! GUI entry point for the skip size picker

mod app;
mod picker_panel;

use app::SkipSizeApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Skip Size Picker",
        options,
        Box::new(|cc| Ok(Box::new(SkipSizeApp::new(cc)))),
    )
}
