use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::colour::Colour;
use crate::tool_state::{Pen, Thickness};

/// One straight line draw command, in surface-local pixels.
///
/// Serialized as `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn between(from: Pos2, to: Pos2) -> Self {
        Self::new(from.x, from.y, to.x, to.y)
    }

    pub fn start(&self) -> Pos2 {
        Pos2::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Pos2 {
        Pos2::new(self.x2, self.y2)
    }
}

impl From<[f32; 4]> for Segment {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<Segment> for [f32; 4] {
    fn from(segment: Segment) -> Self {
        [segment.x1, segment.y1, segment.x2, segment.y2]
    }
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    colour: Colour,
    thickness: Thickness,
    segments: Vec<Segment>,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(colour: Colour, thickness: Thickness, segments: Vec<Segment>) -> Self {
        Self {
            colour,
            thickness,
            segments,
        }
    }

    pub fn new_ref(colour: Colour, thickness: Thickness, segments: Vec<Segment>) -> StrokeRef {
        Arc::new(Self::new(colour, thickness, segments))
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The pen this stroke is replayed with
    pub fn pen(&self) -> Pen {
        Pen::new(self.colour, self.thickness)
    }
}

/// The stroke under construction between pointer-down and pointer-up
#[derive(Debug, Clone, PartialEq)]
pub struct PendingStroke {
    colour: Colour,
    thickness: Thickness,
    segments: Vec<Segment>,
}

impl PendingStroke {
    pub fn new(colour: Colour, thickness: Thickness) -> Self {
        Self {
            colour,
            thickness,
            segments: Vec::new(),
        }
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn pen(&self) -> Pen {
        Pen::new(self.colour, self.thickness)
    }

    // Freeze into a committed stroke
    pub fn into_stroke_ref(self) -> StrokeRef {
        Stroke::new_ref(self.colour, self.thickness, self.segments)
    }
}
