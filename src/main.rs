#![warn(clippy::all, rust_2018_idioms)]

use eframe_doodle::{CanvasConfig, DoodleApp, WINDOW_TITLE};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::load_from_env();
    let [width, height] = config.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([width, height])
            .with_maximized(config.maximized),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(DoodleApp::new(cc, &config)))),
    )
}
