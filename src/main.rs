#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use map_maker::{AppConfig, MapMakerApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let defaults = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(defaults.window_size)
            .with_title("Map Maker"),
        ..Default::default()
    };

    eframe::run_native(
        "Map Maker",
        options,
        Box::new(|cc| Ok(Box::new(MapMakerApp::new(cc)))),
    )
}
