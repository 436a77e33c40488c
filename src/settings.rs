//! Session settings
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Playfield;
use crate::consts::{DEFAULT_OBSTACLES, FIELD_HEIGHT, FIELD_WIDTH};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "normal" | "1" => Some(DifficultyPreset::Normal),
            "hard" | "2" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Speed factor applied to ship tuning and obstacle drift
    pub fn factor(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 0.5,
            DifficultyPreset::Normal => 1.0,
            DifficultyPreset::Hard => 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Session ===
    pub num_obstacles: usize,
    pub preset: DifficultyPreset,
    /// Overrides the preset's speed factor
    pub difficulty: Option<f32>,
    /// RNG seed for obstacle placement, random when absent
    pub seed: Option<u64>,

    // === Driver ===
    /// Simulation frames per second
    pub frame_rate: u32,
    /// Stop the run after this much simulated time
    pub max_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            num_obstacles: DEFAULT_OBSTACLES,
            preset: DifficultyPreset::Normal,
            difficulty: None,
            seed: None,
            frame_rate: 60,
            max_seconds: 120.0,
        }
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Switch preset, dropping any explicit difficulty override
    pub fn apply_preset(&mut self, preset: DifficultyPreset) {
        self.preset = preset;
        self.difficulty = None;
    }

    /// Linear speed factor for ship tuning and obstacle drift
    pub fn difficulty(&self) -> f32 {
        self.difficulty.unwrap_or(self.preset.factor())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height)
    }

    /// Seconds per simulation frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Replace values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.width.is_finite() && self.width > 0.0) {
            log::warn!("Invalid width {}, using {}", self.width, defaults.width);
            self.width = defaults.width;
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            log::warn!("Invalid height {}, using {}", self.height, defaults.height);
            self.height = defaults.height;
        }
        if let Some(difficulty) = self.difficulty {
            if !(difficulty.is_finite() && difficulty >= 0.0) {
                log::warn!("Invalid difficulty {}, using preset", difficulty);
                self.difficulty = None;
            }
        }
        if self.frame_rate == 0 {
            self.frame_rate = defaults.frame_rate;
        }
        if !(self.max_seconds.is_finite() && self.max_seconds > 0.0) {
            self.max_seconds = defaults.max_seconds;
        }
        self
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
