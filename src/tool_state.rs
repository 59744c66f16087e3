use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colour::{Colour, NamedColour};
use crate::error::{ListenerError, ToolError};

pub const MIN_THICKNESS: u32 = 1;
pub const MAX_THICKNESS: u32 = 16;

/// Pen thickness in pixels, always within `MIN_THICKNESS..=MAX_THICKNESS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Thickness(u8);

impl Thickness {
    pub fn new(value: u32) -> Result<Self, ToolError> {
        if (MIN_THICKNESS..=MAX_THICKNESS).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ToolError::ThicknessOutOfRange(value))
        }
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// Every valid thickness, thinnest first
    pub fn all() -> impl Iterator<Item = Thickness> {
        (MIN_THICKNESS..=MAX_THICKNESS).map(|value| Self(value as u8))
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self(MIN_THICKNESS as u8)
    }
}

impl TryFrom<u32> for Thickness {
    type Error = ToolError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Thickness> for u32 {
    fn from(thickness: Thickness) -> Self {
        thickness.get()
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenStyle {
    #[default]
    Solid,
}

/// Drawing style derived from the tool state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub colour: Colour,
    pub width: Thickness,
    pub style: PenStyle,
}

impl Pen {
    pub fn new(colour: Colour, width: Thickness) -> Self {
        Self {
            colour,
            width,
            style: PenStyle::Solid,
        }
    }
}

/// Observer of pen colour and thickness changes
pub trait ToolListener {
    fn update(&mut self, colour: Colour, thickness: Thickness) -> Result<(), ListenerError>;
}

impl<F> ToolListener for F
where
    F: FnMut(Colour, Thickness) -> Result<(), ListenerError>,
{
    fn update(&mut self, colour: Colour, thickness: Thickness) -> Result<(), ListenerError> {
        self(colour, thickness)
    }
}

/// Listener that writes every tool change to the log
#[derive(Debug, Default)]
pub struct LogListener;

impl ToolListener for LogListener {
    fn update(&mut self, colour: Colour, thickness: Thickness) -> Result<(), ListenerError> {
        log::info!("Pen changed: {} at thickness {}", colour, thickness);
        Ok(())
    }
}

/// Current pen colour and thickness, plus the listeners that follow them
pub struct ToolState {
    colour: Colour,
    thickness: Thickness,
    pen: Pen,
    listeners: Vec<Box<dyn ToolListener>>,
}

impl fmt::Debug for ToolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolState")
            .field("colour", &self.colour)
            .field("thickness", &self.thickness)
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(NamedColour::White.into(), Thickness::default())
    }
}

impl ToolState {
    pub fn new(colour: Colour, thickness: Thickness) -> Self {
        Self {
            colour,
            thickness,
            pen: Pen::new(colour, thickness),
            listeners: Vec::new(),
        }
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
        self.pen = Pen::new(self.colour, self.thickness);
        self.notify();
    }

    /// Selects a named colour; unknown names leave the state untouched
    pub fn set_colour_by_name(&mut self, name: &str) -> Result<(), ToolError> {
        let colour: Colour = name.parse()?;
        self.set_colour(colour);
        Ok(())
    }

    /// Rejects values outside `1..=16` without notifying anyone
    pub fn set_thickness(&mut self, value: u32) -> Result<(), ToolError> {
        let thickness = Thickness::new(value)?;
        self.select_thickness(thickness);
        Ok(())
    }

    pub fn select_thickness(&mut self, thickness: Thickness) {
        self.thickness = thickness;
        self.pen = Pen::new(self.colour, self.thickness);
        self.notify();
    }

    pub fn add_listener(&mut self, listener: Box<dyn ToolListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Calls every listener in registration order. A failing listener is
    /// logged and the rest are still notified.
    pub fn notify(&mut self) {
        for (index, listener) in self.listeners.iter_mut().enumerate() {
            if let Err(err) = listener.update(self.colour, self.thickness) {
                log::warn!("Tool listener #{} failed: {}", index, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        let tools = ToolState::default();
        assert_eq!(tools.colour(), Colour::Named(NamedColour::White));
        assert_eq!(tools.thickness().get(), 1);
        assert_eq!(tools.pen().style, PenStyle::Solid);
    }

    #[test]
    fn test_thickness_bounds() {
        assert!(Thickness::new(0).is_err());
        assert!(Thickness::new(1).is_ok());
        assert!(Thickness::new(16).is_ok());
        assert_eq!(Thickness::new(17), Err(ToolError::ThicknessOutOfRange(17)));
        assert_eq!(Thickness::all().count(), 16);
    }

    #[test]
    fn test_pen_follows_changes() {
        let mut tools = ToolState::default();
        tools.set_thickness(7).unwrap();
        tools.set_colour(NamedColour::Navy.into());
        assert_eq!(
            tools.pen(),
            Pen::new(NamedColour::Navy.into(), Thickness::new(7).unwrap())
        );
    }

    #[test]
    fn test_failing_listener_does_not_block_others() {
        let seen = Rc::new(RefCell::new(0));
        let mut tools = ToolState::default();
        tools.add_listener(Box::new(
            |_: Colour, _: Thickness| -> Result<(), ListenerError> {
                Err(ListenerError("boom".to_owned()))
            },
        ));
        let counter = seen.clone();
        tools.add_listener(Box::new(
            move |_: Colour, _: Thickness| -> Result<(), ListenerError> {
                *counter.borrow_mut() += 1;
                Ok(())
            },
        ));

        tools.set_thickness(2).unwrap();
        assert_eq!(*seen.borrow(), 1);
    }
}
