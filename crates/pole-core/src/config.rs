//! Host configuration persisted as `config.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::offset::PoleOffset;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the host persists between sessions. Fields absent from an
/// older file fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoleConfig {
    pub transparency: f32,
    /// Extra vertical stretch applied to both pole halves.
    pub height: f32,
    pub color: [u8; 3],
    /// Overlay width in meters; also sets the pole radius.
    pub size: f32,
    /// Serial of the base station the pole anchors to. `None` until one is
    /// adopted at first discovery.
    pub base_station_serial: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for PoleConfig {
    fn default() -> Self {
        Self {
            transparency: 1.0,
            height: 10.0,
            color: [130, 80, 230],
            size: 0.2,
            base_station_serial: None,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl PoleConfig {
    pub fn offset(&self) -> PoleOffset {
        PoleOffset::new(self.x, self.y, self.z)
    }

    pub fn set_offset(&mut self, offset: &PoleOffset) {
        self.x = offset.x;
        self.y = offset.y;
        self.z = offset.z;
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the file, or write defaults and return them when it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }
}

/// Map an 8-bit RGB triple into the 0..1 range the overlay color call takes,
/// rounded to one decimal place.
pub fn rgb_to_normalized(rgb: [u8; 3]) -> [f32; 3] {
    rgb.map(|c| (c as f32 / 255.0 * 10.0).round() / 10.0)
}
