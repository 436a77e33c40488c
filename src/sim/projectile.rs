//! Shots fired by the ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::wrap_position;
use super::entity::Body;
use crate::Playfield;

/// A shot in straight-line flight. Leaving the playfield removes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, direction: f32) -> Self {
        Self {
            body: Body::new(pos, vel, direction),
        }
    }

    pub fn advance_physics(&mut self, dt: f32, field: &Playfield) {
        self.body.drift(dt);
        let wrapped = wrap_position(self.body.pos, field);
        self.body.pos = wrapped.pos;
        if wrapped.crossed {
            self.body.mark_for_removal();
        }
    }

    pub fn in_flight(&self) -> bool {
        self.body.alive
    }
}
