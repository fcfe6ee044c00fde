//! Entry point for the egui-based askql query console.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use askql::egui_app::ui::{MIN_VIEWPORT_SIZE, QueryApp};
use askql::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(960.0, 680.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "askql",
        native_options,
        Box::new(|_cc| Ok(Box::new(QueryApp::new()))),
    )?;
    Ok(())
}
