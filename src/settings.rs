//! Game settings
//!
//! Read once at startup from an optional JSON file in the working directory.
//! The program takes no arguments; every field has a default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{SCORE_FILE, TARGET_FPS};
use crate::error::Result;

/// Highest frame rate accepted from the settings file
pub const MAX_TARGET_FPS: u32 = 240;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the top-5 list lives
    pub score_file: PathBuf,
    /// Frames (and simulation steps) per second
    pub target_fps: u32,
    /// Sync presentation to the display refresh
    pub vsync: bool,
    /// Fixed RNG seed for reproducible runs; clock-derived when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from(SCORE_FILE),
            target_fps: TARGET_FPS,
            vsync: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file name, relative to the working directory
    pub const FILE_NAME: &'static str = "breakout_settings.json";

    /// Parse settings JSON, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from `path`; falls back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No settings file, using defaults");
                return Self::default();
            }
            Err(err) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), err);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{} in {}; using defaults", err, path.display());
                Self::default()
            }
        }
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Clamp out-of-range values
    fn sanitized(mut self) -> Self {
        self.target_fps = self.target_fps.clamp(1, MAX_TARGET_FPS);
        self
    }

    /// RNG seed for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
