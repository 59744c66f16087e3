use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Named pen colours. Everything in [`PALETTE`] plus `White`, the starting pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NamedColour {
    White,
    Black,
    Yellow,
    Red,
    Green,
    Blue,
    Purple,
    Brown,
    Aquamarine,
    ForestGreen,
    LightBlue,
    Goldenrod,
    Cyan,
    Orange,
    Navy,
    DarkGrey,
    LightGrey,
}

/// The colours offered by the tool menu, in menu order
pub const PALETTE: [NamedColour; 16] = [
    NamedColour::Black,
    NamedColour::Yellow,
    NamedColour::Red,
    NamedColour::Green,
    NamedColour::Blue,
    NamedColour::Purple,
    NamedColour::Brown,
    NamedColour::Aquamarine,
    NamedColour::ForestGreen,
    NamedColour::LightBlue,
    NamedColour::Goldenrod,
    NamedColour::Cyan,
    NamedColour::Orange,
    NamedColour::Navy,
    NamedColour::DarkGrey,
    NamedColour::LightGrey,
];

/// Menu id of the first palette entry; the rest follow in palette order.
pub const FIRST_COLOUR_ID: u32 = 100;

impl NamedColour {
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Brown => "Brown",
            Self::Aquamarine => "Aquamarine",
            Self::ForestGreen => "Forest Green",
            Self::LightBlue => "Light Blue",
            Self::Goldenrod => "Goldenrod",
            Self::Cyan => "Cyan",
            Self::Orange => "Orange",
            Self::Navy => "Navy",
            Self::DarkGrey => "Dark Grey",
            Self::LightGrey => "Light Grey",
        }
    }

    /// RGB values of the classic desktop colour database these names come from
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::White => [255, 255, 255],
            Self::Black => [0, 0, 0],
            Self::Yellow => [255, 255, 0],
            Self::Red => [255, 0, 0],
            Self::Green => [0, 255, 0],
            Self::Blue => [0, 0, 255],
            Self::Purple => [176, 0, 255],
            Self::Brown => [165, 42, 42],
            Self::Aquamarine => [112, 219, 147],
            Self::ForestGreen => [35, 142, 35],
            Self::LightBlue => [192, 217, 217],
            Self::Goldenrod => [219, 219, 112],
            Self::Cyan => [0, 255, 255],
            Self::Orange => [255, 127, 0],
            Self::Navy => [35, 35, 142],
            Self::DarkGrey => [47, 47, 47],
            Self::LightGrey => [192, 192, 192],
        }
    }

    /// Menu id for palette colours, `None` for colours not in the menu
    pub fn menu_id(self) -> Option<u32> {
        PALETTE
            .iter()
            .position(|c| *c == self)
            .map(|index| FIRST_COLOUR_ID + index as u32)
    }

    pub fn from_menu_id(id: u32) -> Option<Self> {
        let index = id.checked_sub(FIRST_COLOUR_ID)? as usize;
        PALETTE.get(index).copied()
    }
}

impl fmt::Display for NamedColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColour {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(NamedColour::White)
            .chain(PALETTE)
            .find(|c| c.name() == s)
            .ok_or_else(|| ToolError::UnknownColour(s.to_owned()))
    }
}

impl TryFrom<String> for NamedColour {
    type Error = ToolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NamedColour> for String {
    fn from(colour: NamedColour) -> Self {
        colour.name().to_owned()
    }
}

/// A pen colour: a palette name or any RGB value.
///
/// Serializes as the colour name (`"Forest Green"`) or as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colour {
    Named(NamedColour),
    Rgb([u8; 3]),
}

impl Colour {
    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = match self {
            Colour::Named(named) => named.rgb(),
            Colour::Rgb(rgb) => rgb,
        };
        Color32::from_rgb(r, g, b)
    }

    pub fn as_named(self) -> Option<NamedColour> {
        match self {
            Colour::Named(named) => Some(named),
            Colour::Rgb(_) => None,
        }
    }
}

impl From<NamedColour> for Colour {
    fn from(named: NamedColour) -> Self {
        Colour::Named(named)
    }
}

impl FromStr for Colour {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Colour::Named)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::Named(named) => named.fmt(f),
            Colour::Rgb([r, g, b]) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}
