use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use egui::{PointerButton, Pos2};

use crate::document::Document;
use crate::renderer::BufferedRenderer;
use crate::stroke::{PendingStroke, Segment};
use crate::tool_state::ToolState;

/// Pointer input delivered by the host surface, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown { position: Pos2, button: PointerButton },
    /// Mouse button was released
    PointerUp { position: Pos2, button: PointerButton },
    /// Mouse moved; `primary_held` tells whether this is a primary-button drag
    PointerMove { position: Pos2, primary_held: bool },
    /// The surface lost pointer ownership without seeing a button release
    CaptureLost,
}

/// What the host should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    Ignored,
    /// The buffer changed and the screen copy should be refreshed
    Repaint,
    /// A stroke was added to the document
    Committed,
    /// Show the tool menu at this position
    OpenMenu(Pos2),
}

/// Exclusive ownership of the pointer for the duration of a drag.
///
/// Only ever lives inside [`InputController`]'s drawing state, so leaving that
/// state by any route drops (releases) it. The shared flag is raised on
/// acquire and lowered on drop; the controller reports capture from it.
#[derive(Debug)]
pub struct PointerCapture {
    held: Arc<AtomicBool>,
}

impl PointerCapture {
    fn acquire(held: &Arc<AtomicBool>) -> Self {
        log::trace!("Pointer captured");
        held.store(true, Ordering::Relaxed);
        Self {
            held: Arc::clone(held),
        }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        log::trace!("Pointer released");
        self.held.store(false, Ordering::Relaxed);
    }
}

#[derive(Debug, Default)]
enum ControllerState {
    #[default]
    Idle,
    Drawing {
        last_position: Pos2,
        pending: PendingStroke,
        capture: PointerCapture,
    },
}

/// Turns pointer events into stroke commits and live buffer drawing.
///
/// ```text
///   Idle --primary down--> Drawing --primary up / capture lost--> Idle
///   Idle --secondary up--> Idle (open menu)
///   Drawing --drag--> Drawing (append + draw segment)
/// ```
#[derive(Debug, Default)]
pub struct InputController {
    state: ControllerState,
    // Raised while a `PointerCapture` is alive
    capture_held: Arc<AtomicBool>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
        tools: &ToolState,
        document: &mut Document,
        renderer: &mut BufferedRenderer,
    ) -> InputOutcome {
        match event {
            InputEvent::PointerDown {
                position,
                button: PointerButton::Primary,
            } => self.begin_stroke(position, tools),
            InputEvent::PointerDown { .. } => InputOutcome::Ignored,
            InputEvent::PointerMove {
                position,
                primary_held,
            } => {
                if primary_held {
                    self.extend_stroke(position, renderer)
                } else {
                    InputOutcome::Ignored
                }
            }
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            } => self.finish_stroke(document),
            InputEvent::PointerUp {
                position,
                button: PointerButton::Secondary,
            } => {
                if self.is_drawing() {
                    InputOutcome::Ignored
                } else {
                    InputOutcome::OpenMenu(position)
                }
            }
            InputEvent::PointerUp { .. } => InputOutcome::Ignored,
            InputEvent::CaptureLost => {
                if self.is_drawing() {
                    log::debug!("Pointer capture lost mid-stroke, committing");
                }
                self.finish_stroke(document)
            }
        }
    }

    fn begin_stroke(&mut self, position: Pos2, tools: &ToolState) -> InputOutcome {
        if self.is_drawing() {
            log::warn!("Ignoring pointer down at {:?}: already drawing", position);
            return InputOutcome::Ignored;
        }

        log::debug!("Idle -> Drawing at {:?}", position);
        self.state = ControllerState::Drawing {
            last_position: position,
            pending: PendingStroke::new(tools.colour(), tools.thickness()),
            capture: PointerCapture::acquire(&self.capture_held),
        };
        InputOutcome::Ignored
    }

    fn extend_stroke(&mut self, position: Pos2, renderer: &mut BufferedRenderer) -> InputOutcome {
        let ControllerState::Drawing {
            last_position,
            pending,
            ..
        } = &mut self.state
        else {
            return InputOutcome::Ignored;
        };

        let segment = Segment::between(*last_position, position);
        pending.add_segment(segment);
        renderer.draw_segment_live(&segment, &pending.pen());
        *last_position = position;
        InputOutcome::Repaint
    }

    fn finish_stroke(&mut self, document: &mut Document) -> InputOutcome {
        match std::mem::take(&mut self.state) {
            ControllerState::Drawing {
                pending, capture, ..
            } => {
                // Plain clicks commit a stroke without segments
                log::debug!(
                    "Drawing -> Idle, committing stroke with {} segments",
                    pending.segments().len()
                );
                document.append(pending.into_stroke_ref());
                drop(capture);
                InputOutcome::Committed
            }
            ControllerState::Idle => {
                log::debug!("Pointer up without capture, ignoring");
                InputOutcome::Ignored
            }
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, ControllerState::Drawing { .. })
    }

    /// Whether a capture guard is currently alive
    pub fn has_capture(&self) -> bool {
        self.capture_held.load(Ordering::Relaxed)
    }

    /// The stroke being drawn, if any
    pub fn pending(&self) -> Option<&PendingStroke> {
        match &self.state {
            ControllerState::Drawing { pending, .. } => Some(pending),
            ControllerState::Idle => None,
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        match self.state {
            ControllerState::Idle => "Idle",
            ControllerState::Drawing { .. } => "Drawing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::NamedColour;
    use crate::tool_state::Thickness;

    fn press(position: Pos2) -> InputEvent {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Primary,
        }
    }

    #[test]
    fn test_capture_flag_follows_guard_lifetime() {
        let held = Arc::new(AtomicBool::new(false));
        let capture = PointerCapture::acquire(&held);
        assert!(held.load(Ordering::Relaxed));
        drop(capture);
        assert!(!held.load(Ordering::Relaxed));
    }

    #[test]
    fn test_capture_released_when_state_is_replaced() {
        let tools = ToolState::new(NamedColour::Red.into(), Thickness::new(3).unwrap());
        let mut document = Document::new();
        let mut renderer = BufferedRenderer::new(NamedColour::White.into(), [20, 20], &document);
        let mut controller = InputController::new();

        controller.handle_event(press(Pos2::new(1.0, 1.0)), &tools, &mut document, &mut renderer);
        assert!(controller.has_capture());

        // Leaving Drawing without going through the commit path still drops the guard
        controller.state = ControllerState::Idle;
        assert!(!controller.has_capture());
        assert!(document.is_empty());
    }
}
