// src/renderer.rs
use egui::{Color32, ColorImage, Painter, Pos2, Rect, TextureHandle, TextureOptions};
use image::{Rgba, RgbaImage};

use crate::colour::Colour;
use crate::document::Document;
use crate::stroke::Segment;
use crate::tool_state::Pen;

/// Offscreen image kept in step with the stroke model and the surface size.
///
/// The buffer is a cache: it can always be rebuilt from the document and the
/// background colour. Resizes only mark it dirty; the rebuild happens on the
/// next idle tick so a drag-resize costs one replay, not one per frame.
pub struct BufferedRenderer {
    buffer: RgbaImage,
    background: Colour,
    dirty: bool,
    pending_size: [u32; 2],
    // Screen copy of the buffer, refreshed lazily on paint
    texture: Option<TextureHandle>,
    texture_stale: bool,
}

impl std::fmt::Debug for BufferedRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferedRenderer")
            .field("size", &self.size())
            .field("background", &self.background)
            .field("dirty", &self.dirty)
            .field("pending_size", &self.pending_size)
            .field("texture_stale", &self.texture_stale)
            .finish()
    }
}

impl BufferedRenderer {
    pub fn new(background: Colour, size: [u32; 2], document: &Document) -> Self {
        let mut renderer = Self {
            buffer: RgbaImage::new(1, 1),
            background,
            dirty: false,
            pending_size: size,
            texture: None,
            texture_stale: true,
        };
        renderer.init_buffer(size, document);
        renderer
    }

    /// Reallocates the buffer (never smaller than 1x1), clears it to the
    /// background and replays every stroke in order.
    pub fn init_buffer(&mut self, size: [u32; 2], document: &Document) {
        let [width, height] = clamp_size(size);
        self.buffer = RgbaImage::from_pixel(width, height, to_rgba(self.background.to_color32()));

        for stroke in document.strokes() {
            let pen = stroke.pen();
            for segment in stroke.segments() {
                draw_segment(&mut self.buffer, segment, &pen);
            }
        }

        log::debug!(
            "Buffer rebuilt at {}x{} with {} strokes",
            width,
            height,
            document.len()
        );
        self.pending_size = [width, height];
        self.dirty = false;
        self.texture_stale = true;
    }

    /// Incremental path for the stroke being drawn: no replay
    pub fn draw_segment_live(&mut self, segment: &Segment, pen: &Pen) {
        log::trace!("Live segment {:?}", segment);
        draw_segment(&mut self.buffer, segment, pen);
        self.texture_stale = true;
    }

    /// Records a new surface size. The buffer is rebuilt on the next idle tick.
    /// A size equal to the current target (after clamping) is a no-op.
    pub fn resize(&mut self, size: [u32; 2]) {
        let size = clamp_size(size);
        if size == self.pending_size {
            return;
        }
        self.pending_size = size;
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Idle tick: rebuilds once if a resize happened since the last rebuild.
    /// Returns whether a rebuild took place.
    pub fn on_idle(&mut self, document: &Document) -> bool {
        if !self.dirty {
            return false;
        }
        self.init_buffer(self.pending_size, document);
        true
    }

    pub fn size(&self) -> [u32; 2] {
        [self.buffer.width(), self.buffer.height()]
    }

    /// Size the buffer has, or will have after the pending rebuild.
    /// Never smaller than 1x1.
    pub fn target_size(&self) -> [u32; 2] {
        self.pending_size
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    pub fn background(&self) -> Colour {
        self.background
    }

    /// Blits the buffer at `rect.min`, uploading it first if it changed.
    pub fn paint(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect) {
        if self.texture_stale || self.texture.is_none() {
            let [width, height] = self.size();
            let image = ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                self.buffer.as_raw(),
            );
            match &mut self.texture {
                Some(handle) => handle.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("doodle-buffer", image, TextureOptions::NEAREST));
                }
            }
            self.texture_stale = false;
        }

        if let Some(texture) = &self.texture {
            let [width, height] = self.size();
            let target = Rect::from_min_size(rect.min, egui::vec2(width as f32, height as f32));
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(texture.id(), target, uv, Color32::WHITE);
        }
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}

/// Solid round-capped line: a pixel is covered when its position lies within
/// half the pen width of the segment (at least half a pixel).
/// Buffer dimensions for a surface size: zero-sized surfaces still get 1x1
pub fn clamp_size(size: [u32; 2]) -> [u32; 2] {
    [size[0].max(1), size[1].max(1)]
}

fn draw_segment(buffer: &mut RgbaImage, segment: &Segment, pen: &Pen) {
    let radius = (pen.width.get() as f32 / 2.0).max(0.5);
    let colour = to_rgba(pen.colour.to_color32());
    let (start, end) = (segment.start(), segment.end());

    let min_x = (start.x.min(end.x) - radius).floor().max(0.0);
    let min_y = (start.y.min(end.y) - radius).floor().max(0.0);
    let max_x = (start.x.max(end.x) + radius).ceil().min(buffer.width() as f32 - 1.0);
    let max_y = (start.y.max(end.y) + radius).ceil().min(buffer.height() as f32 - 1.0);
    // Also rejects NaN coordinates
    if !(min_x <= max_x && min_y <= max_y) {
        return;
    }

    for py in min_y as u32..=max_y as u32 {
        for px in min_x as u32..=max_x as u32 {
            let point = Pos2::new(px as f32, py as f32);
            if distance_to_line_segment(point, start, end) <= radius {
                buffer.put_pixel(px, py, colour);
            }
        }
    }
}

/// Calculate distance from a point to a line segment
fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}
