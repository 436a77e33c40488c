//! The player's ship

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::wrap_position;
use super::entity::{Body, Explosion, Turn};
use super::projectile::Projectile;
use crate::consts::*;
use crate::{Playfield, heading, normalize_degrees};

/// Where the ship is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipPhase {
    Flying,
    /// Hit an obstacle; still drawn and still moving until removed
    Exploded,
    Removed,
}

/// Physics tuning for a ship, scaled by difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipTuning {
    /// Degrees per second
    pub rotation_rate: f32,
    /// Pixels per second squared
    pub acceleration: f32,
    /// Per-axis velocity clamp
    pub max_speed: f32,
    pub reload_interval: Duration,
    pub muzzle_speed: f32,
}

impl ShipTuning {
    /// Rotation rate, acceleration and max speed scale linearly with difficulty
    pub fn scaled(difficulty: f32) -> Self {
        Self {
            rotation_rate: SHIP_ROTATION_RATE * difficulty,
            acceleration: SHIP_ACCELERATION * difficulty,
            max_speed: SHIP_MAX_SPEED * difficulty,
            reload_interval: RELOAD_INTERVAL,
            muzzle_speed: MUZZLE_SPEED,
        }
    }
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Drawing geometry only
    pub length: f32,
    pub width: f32,
    pub tuning: ShipTuning,
    pub thrusting: bool,
    last_fired: Option<Duration>,
    explosion: Explosion,
}

impl Ship {
    /// A motionless ship facing 0 degrees at `pos`
    pub fn new(pos: Vec2, tuning: ShipTuning) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, 0.0),
            length: SHIP_LENGTH,
            width: SHIP_WIDTH,
            tuning,
            thrusting: false,
            last_fired: None,
            explosion: Explosion::default(),
        }
    }

    pub fn set_turn(&mut self, turn: Turn) {
        self.body.turn = turn;
    }

    pub fn set_thrusting(&mut self, thrusting: bool) {
        self.thrusting = thrusting;
    }

    /// Rotate, accelerate, clamp, then move with the trapezoidal rule
    pub fn advance_physics(&mut self, dt: f32, field: &Playfield) {
        let body = &mut self.body;

        if body.turn != Turn::None {
            body.direction =
                normalize_degrees(body.direction + body.turn.sign() * self.tuning.rotation_rate * dt);
        }

        let accel = if self.thrusting {
            heading(body.direction) * (self.tuning.acceleration * dt)
        } else {
            Vec2::ZERO
        };

        let old_vel = body.vel;
        let max = Vec2::splat(self.tuning.max_speed);
        body.vel = (body.vel + accel).clamp(-max, max);

        // Average of old and new velocity over the step
        body.translate(dt * (old_vel + body.vel) / 2.0);
        body.pos = wrap_position(body.pos, field).pos;
    }

    /// Fire a projectile from the ship's position along its facing direction.
    ///
    /// Returns `None` while the weapon is still reloading.
    pub fn fire_weapon(&mut self, now: Duration) -> Option<Projectile> {
        if let Some(last) = self.last_fired {
            if now.saturating_sub(last) < self.tuning.reload_interval {
                return None;
            }
        }
        self.last_fired = Some(now);

        let vel = heading(self.body.direction) * self.tuning.muzzle_speed;
        Some(Projectile::new(self.body.pos, vel, self.body.direction))
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

    /// Alive and never exploded
    pub fn in_play(&self) -> bool {
        self.body.alive && !self.is_exploded()
    }

    pub fn phase(&self) -> ShipPhase {
        if !self.body.alive {
            ShipPhase::Removed
        } else if self.is_exploded() {
            ShipPhase::Exploded
        } else {
            ShipPhase::Flying
        }
    }
}
