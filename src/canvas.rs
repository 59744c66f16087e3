use egui::{CursorIcon, PointerButton, Pos2, Sense};

use crate::colour::Colour;
use crate::config::CanvasConfig;
use crate::document::Document;
use crate::error::ToolError;
use crate::input::{InputController, InputEvent, InputOutcome};
use crate::menu::{MenuSelection, ToolMenu};
use crate::renderer::{clamp_size, BufferedRenderer};
use crate::stroke::StrokeRef;
use crate::tool_state::{ToolListener, ToolState};

/// The freehand drawing surface.
///
/// Owns the stroke model, the tool state, the offscreen buffer and the input
/// state machine, and wires them to egui in [`DoodleCanvas::ui`]. Everything
/// except `ui` works without an egui context.
#[derive(Debug)]
pub struct DoodleCanvas {
    document: Document,
    tools: ToolState,
    renderer: BufferedRenderer,
    input: InputController,
    // Screen position of the open tool menu
    menu_at: Option<Pos2>,
}

impl DoodleCanvas {
    /// Starts with a 1x1 buffer; the first frame resizes it to the panel
    pub fn new(config: &CanvasConfig) -> Self {
        Self::with_size(config, [1, 1])
    }

    pub fn with_size(config: &CanvasConfig, size: [u32; 2]) -> Self {
        let document = Document::new();
        let renderer = BufferedRenderer::new(config.background, size, &document);
        Self {
            document,
            tools: ToolState::new(config.initial_colour, config.initial_thickness),
            renderer,
            input: InputController::new(),
            menu_at: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn renderer(&self) -> &BufferedRenderer {
        &self.renderer
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Snapshot of the committed strokes
    pub fn lines_data(&self) -> Vec<StrokeRef> {
        self.document.get_all()
    }

    /// Replaces every stroke and replays them into the buffer
    pub fn set_lines_data(&mut self, strokes: Vec<StrokeRef>) {
        self.document.replace_all(strokes);
        let size = self.renderer.target_size();
        self.renderer.init_buffer(size, &self.document);
    }

    pub fn add_listener(&mut self, listener: Box<dyn ToolListener>) {
        self.tools.add_listener(listener);
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.tools.set_colour(colour);
    }

    pub fn set_thickness(&mut self, thickness: u32) -> Result<(), ToolError> {
        self.tools.set_thickness(thickness)
    }

    pub fn select_menu(&mut self, selection: MenuSelection) {
        selection.apply(&mut self.tools);
    }

    pub fn handle_event(&mut self, event: InputEvent) -> InputOutcome {
        self.input.handle_event(
            event,
            &self.tools,
            &mut self.document,
            &mut self.renderer,
        )
    }

    /// Resize notification: only records the size
    pub fn resize(&mut self, size: [u32; 2]) {
        let size = clamp_size(size);
        if size != self.renderer.target_size() {
            log::debug!("Surface resized to {}x{}", size[0], size[1]);
            self.renderer.resize(size);
        }
    }

    /// Idle tick: performs any deferred buffer rebuild
    pub fn on_idle(&mut self) -> bool {
        self.renderer.on_idle(&self.document)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_at.is_some()
    }

    /// Runs one frame of the surface inside `ui`, filling the available space
    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let ctx = ui.ctx().clone();

        // Whatever was deferred last frame is reconciled first
        if self.on_idle() {
            ctx.request_repaint();
        }

        let menu_was_open = self.menu_at.is_some();
        if let Some(position) = self.menu_at {
            let menu = ToolMenu::show(&ctx, position, &self.tools);
            if let Some(selection) = menu.selection {
                self.select_menu(selection);
            }
            if menu.close {
                self.menu_at = None;
            }
        }

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        self.resize([rect.width().round() as u32, rect.height().round() as u32]);
        if self.renderer.is_dirty() {
            ctx.request_repaint();
        }

        let events = ctx.input(|i| i.events.clone());
        let mut primary_held = self.input.is_drawing();
        for event in events {
            let input_event = match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    if button == PointerButton::Primary {
                        primary_held = pressed;
                    }
                    let position = (pos - rect.min).to_pos2();
                    if pressed {
                        // A click that dismisses the menu does not draw
                        if menu_was_open || !response.hovered() {
                            continue;
                        }
                        InputEvent::PointerDown { position, button }
                    } else {
                        if !self.input.has_capture() && !response.hovered() {
                            continue;
                        }
                        InputEvent::PointerUp { position, button }
                    }
                }
                egui::Event::PointerMoved(pos) => InputEvent::PointerMove {
                    position: (pos - rect.min).to_pos2(),
                    primary_held,
                },
                egui::Event::WindowFocused(false) => InputEvent::CaptureLost,
                _ => continue,
            };

            match self.handle_event(input_event) {
                InputOutcome::OpenMenu(position) => {
                    self.menu_at = Some(rect.min + position.to_vec2());
                    ctx.request_repaint();
                }
                InputOutcome::Repaint | InputOutcome::Committed => ctx.request_repaint(),
                InputOutcome::Ignored => {}
            }
        }

        self.renderer.paint(&ctx, &painter, rect);

        if self.input.has_capture() {
            ctx.set_cursor_icon(CursorIcon::Crosshair);
        }
        response.on_hover_cursor(CursorIcon::Crosshair)
    }
}
