//! Drifting obstacles (asteroids)

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{within_box, wrap_position};
use super::entity::{Body, Explosion};
use crate::Playfield;

/// Where an obstacle is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstaclePhase {
    Drifting,
    /// Struck by a projectile; still drifting and still dangerous
    Exploded,
    Removed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    /// Half-size of the square hit-box and the drawn circle's radius
    pub radius: f32,
    explosion: Explosion,
}

impl Obstacle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel, 0.0),
            radius,
            explosion: Explosion::default(),
        }
    }

    /// Linear drift, wrapping at the borders
    pub fn advance_physics(&mut self, dt: f32, field: &Playfield) {
        self.body.drift(dt);
        self.body.pos = wrap_position(self.body.pos, field).pos;
    }

    /// `other` lies within +/- radius on both axes
    pub fn is_overlapping(&self, other: &Body) -> bool {
        within_box(self.body.pos, self.radius, other.pos)
    }

    /// `other` lies within +/- 2 * radius on both axes; used at spawn time
    pub fn is_near(&self, other: &Body) -> bool {
        within_box(self.body.pos, 2.0 * self.radius, other.pos)
    }

    /// Returns true only for the call that caused the explosion
    pub fn explode(&mut self, now: Duration) -> bool {
        self.explosion.trigger(now)
    }

    pub fn is_exploded(&self) -> bool {
        self.explosion.is_active()
    }

    pub fn explosion_finished(&self, now: Duration) -> bool {
        self.explosion.is_finished(now)
    }

    pub fn phase(&self) -> ObstaclePhase {
        if !self.body.alive {
            ObstaclePhase::Removed
        } else if self.is_exploded() {
            ObstaclePhase::Exploded
        } else {
            ObstaclePhase::Drifting
        }
    }
}
