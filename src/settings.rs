//! Viewer settings and preferences
//!
//! Presentation state owned by a front-end and handed to whatever renders
//! the curve. The engine never reads it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TransitResult;

/// How the front-end emits a finished curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns for reading in a terminal
    #[default]
    #[cfg_attr(not(target_arch = "wasm32"), value(alias = "text"))]
    Table,
    /// `frame,brightness,x,y` rows
    Csv,
    /// Pretty-printed array of points
    Json,
}

/// Viewer preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Show the usage hint before the output
    pub show_info: bool,
    /// Delay between animation frames (milliseconds)
    pub frame_interval_ms: u32,
    /// Loop the animation after the last frame
    pub repeat: bool,
    pub format: OutputFormat,
    /// Decimal places for brightness in table output
    pub precision: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_info: true,
            frame_interval_ms: 50,
            repeat: false,
            format: OutputFormat::Table,
            precision: 4,
        }
    }
}

impl ViewSettings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> TransitResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults when the file is missing or unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded view settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default view settings ({e})");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> TransitResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("View settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Total playback time for a curve of `frames` samples (milliseconds)
    pub fn playback_duration_ms(&self, frames: usize) -> u64 {
        frames as u64 * u64::from(self.frame_interval_ms)
    }
}
