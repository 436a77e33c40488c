//! Space Wars - a wrap-around asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `settings`: Data-driven session configuration
//! - `input`: Keyboard edges mapped onto ship controls
//! - `autopilot`: Demo controller that plays the game through the control API

pub mod autopilot;
pub mod input;
pub mod settings;
pub mod sim;

pub use settings::{DifficultyPreset, Settings};

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Default playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Obstacles spawned at session start
    pub const DEFAULT_OBSTACLES: usize = 10;

    /// How long an exploded ship or obstacle stays in the world
    pub const EXPLOSION_DURATION: Duration = Duration::from_millis(700);

    /// Ship defaults, before difficulty scaling
    pub const SHIP_LENGTH: f32 = 20.0;
    pub const SHIP_WIDTH: f32 = 10.0;
    /// Degrees per second
    pub const SHIP_ROTATION_RATE: f32 = 120.0;
    /// Pixels per second squared
    pub const SHIP_ACCELERATION: f32 = 40.0;
    /// Per-axis velocity cap (pixels per second)
    pub const SHIP_MAX_SPEED: f32 = 150.0;
    pub const RELOAD_INTERVAL: Duration = Duration::from_millis(300);
    pub const MUZZLE_SPEED: f32 = 300.0;

    /// Obstacle spawn ranges, before difficulty scaling
    pub const OBSTACLE_MIN_RADIUS: f32 = 10.0;
    pub const OBSTACLE_MAX_RADIUS: f32 = 30.0;
    /// Each velocity component is drawn from [-MAX, MAX)
    pub const OBSTACLE_MAX_DRIFT: f32 = 5.0;
}

/// The rectangular, wrap-around playing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(consts::FIELD_WIDTH, consts::FIELD_HEIGHT)
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `pos` lies within [0, width) x [0, height)
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for a facing direction in degrees (y up, counter-clockwise)
#[inline]
pub fn heading(direction_deg: f32) -> Vec2 {
    let radians = direction_deg.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Convert a frame delta in seconds to a clock step.
///
/// Returns `None` for negative, NaN or unrepresentable deltas, which must not
/// advance time.
#[inline]
pub fn seconds_to_duration(dt: f32) -> Option<Duration> {
    if dt >= 0.0 && dt.is_finite() {
        Duration::try_from_secs_f32(dt).ok()
    } else {
        None
    }
}
