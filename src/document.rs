use crate::stroke::StrokeRef;

/// The stroke model: every committed stroke, in drawing (z) order.
///
/// Append-only while drawing. `replace_all` is the one bulk entry point and
/// is meant for loading stroke data handed over from outside.
#[derive(Debug, Default, Clone)]
pub struct Document {
    strokes: Vec<StrokeRef>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Snapshot of all strokes. Strokes are immutable, so sharing them is safe.
    pub fn get_all(&self) -> Vec<StrokeRef> {
        self.strokes.clone()
    }

    pub fn append(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn replace_all(&mut self, strokes: Vec<StrokeRef>) {
        log::debug!(
            "Replacing {} strokes with {}",
            self.strokes.len(),
            strokes.len()
        );
        self.strokes = strokes;
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::NamedColour;
    use crate::stroke::{Segment, Stroke};
    use crate::tool_state::Thickness;

    fn stroke(x: f32) -> StrokeRef {
        Stroke::new_ref(
            NamedColour::Blue.into(),
            Thickness::default(),
            vec![Segment::new(x, 0.0, x, 10.0)],
        )
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut document = Document::new();
        document.append(stroke(1.0));

        let mut snapshot = document.get_all();
        snapshot.push(stroke(2.0));
        snapshot.clear();

        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut document = Document::new();
        document.append(stroke(1.0));
        document.append(stroke(2.0));

        let xs: Vec<f32> = document
            .strokes()
            .iter()
            .map(|s| s.segments()[0].x1)
            .collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }
}
