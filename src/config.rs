use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colour::{Colour, NamedColour};
use crate::tool_state::Thickness;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "DOODLE_CONFIG";

/// Startup settings for the drawing surface and its window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct CanvasConfig {
    pub background: Colour,
    pub initial_colour: Colour,
    pub initial_thickness: Thickness,
    pub window_size: [f32; 2],
    pub maximized: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: NamedColour::ForestGreen.into(),
            initial_colour: NamedColour::White.into(),
            initial_thickness: Thickness::default(),
            window_size: [1024.0, 768.0],
            maximized: true,
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads the file named by `DOODLE_CONFIG`. Falls back to defaults when
    /// the variable is unset or the file cannot be used.
    pub fn load_from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_or_default(Path::new(&path)),
            None => Self::default(),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Cannot read config {}: {}", path.display(), err);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Invalid config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}
