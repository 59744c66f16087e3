#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod colour;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod interchange;
pub mod menu;
pub mod renderer;
pub mod stroke;
pub mod tool_state;

pub use app::{DoodleApp, WINDOW_TITLE};
pub use canvas::DoodleCanvas;
pub use colour::{Colour, NamedColour, PALETTE};
pub use config::CanvasConfig;
pub use document::Document;
pub use error::{InterchangeError, ListenerError, ToolError};
pub use input::{InputController, InputEvent, InputOutcome};
pub use menu::{MenuEntry, MenuSelection, ToolMenu};
pub use renderer::BufferedRenderer;
pub use stroke::{PendingStroke, Segment, Stroke, StrokeRef};
pub use tool_state::{LogListener, Pen, Thickness, ToolListener, ToolState};
