//! Stroke data hand-off: the `{colour, thickness, segments}` record list that
//! [`Document::get_all`](crate::Document::get_all) and
//! [`Document::replace_all`](crate::Document::replace_all) exchange with any
//! outside collaborator.

use serde::Deserialize;

use crate::colour::Colour;
use crate::error::InterchangeError;
use crate::stroke::{Segment, Stroke, StrokeRef};
use crate::tool_state::Thickness;

// Wire shape before validation: colour names and thickness are checked in
// `into_stroke` so that a bad value reports which rule it broke.
#[derive(Deserialize)]
struct StrokeRecord {
    colour: ColourRecord,
    thickness: u32,
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColourRecord {
    Name(String),
    Rgb([u8; 3]),
}

impl StrokeRecord {
    fn into_stroke(self) -> Result<StrokeRef, InterchangeError> {
        let colour = match self.colour {
            ColourRecord::Name(name) => name.parse::<Colour>()?,
            ColourRecord::Rgb(rgb) => Colour::Rgb(rgb),
        };
        let thickness = Thickness::new(self.thickness)?;
        Ok(Stroke::new_ref(colour, thickness, self.segments))
    }
}

pub fn strokes_to_json(strokes: &[StrokeRef]) -> Result<String, InterchangeError> {
    let records: Vec<&Stroke> = strokes.iter().map(|stroke| stroke.as_ref()).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parses and validates stroke records. Thickness and colour names are
/// checked, so a bad record fails the whole load: malformed JSON is
/// [`InterchangeError::Json`], an out-of-range value is [`InterchangeError::Tool`].
pub fn strokes_from_json(json: &str) -> Result<Vec<StrokeRef>, InterchangeError> {
    let records: Vec<StrokeRecord> = serde_json::from_str(json)?;
    records.into_iter().map(StrokeRecord::into_stroke).collect()
}
