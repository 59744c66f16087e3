use crate::canvas::DoodleCanvas;
use crate::config::CanvasConfig;
use crate::tool_state::LogListener;

pub const WINDOW_TITLE: &str = "Rust Drawing";

/// Host window: a single drawing surface filling the central panel
#[derive(Debug)]
pub struct DoodleApp {
    canvas: DoodleCanvas,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &CanvasConfig) -> Self {
        let mut canvas = DoodleCanvas::new(config);
        canvas.add_listener(Box::new(LogListener));
        Self { canvas }
    }

    pub fn canvas(&self) -> &DoodleCanvas {
        &self.canvas
    }
}

impl eframe::App for DoodleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas.ui(ui);
            });
    }
}
