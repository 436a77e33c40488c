//! State shared by every moving thing on the playfield

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::EXPLOSION_DURATION;

/// Rotation intent, driven by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    /// Decreasing direction angle
    Clockwise,
    #[default]
    None,
    /// Increasing direction angle
    CounterClockwise,
}

impl Turn {
    /// -1, 0 or +1
    pub fn sign(self) -> f32 {
        match self {
            Turn::Clockwise => -1.0,
            Turn::None => 0.0,
            Turn::CounterClockwise => 1.0,
        }
    }

    /// Map a raw -1/0/+1 intent; any other magnitude is reduced to its sign
    pub fn from_sign(value: i32) -> Self {
        match value.signum() {
            -1 => Turn::Clockwise,
            1 => Turn::CounterClockwise,
            _ => Turn::None,
        }
    }
}

/// Kinematic state common to ship, obstacles and projectiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Playfield coordinates, y grows downward
    pub pos: Vec2,
    /// Pixels per second, y positive upward
    pub vel: Vec2,
    /// Facing direction in degrees, [0, 360)
    pub direction: f32,
    pub turn: Turn,
    /// False once the entity has been retired
    pub alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, direction: f32) -> Self {
        Self {
            pos,
            vel,
            direction,
            turn: Turn::None,
            alive: true,
        }
    }

    /// Translate by `dt * vel`, flipping vertical velocity into screen space
    pub fn drift(&mut self, dt: f32) {
        self.translate(dt * self.vel);
    }

    /// Apply a displacement given in world orientation (y up)
    pub fn translate(&mut self, delta: Vec2) {
        self.pos.x += delta.x;
        self.pos.y -= delta.y;
    }

    pub fn mark_for_removal(&mut self) {
        self.alive = false;
    }
}

/// Explode-then-remove timer shared by ship and obstacles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosion {
    started_at: Option<Duration>,
}

impl Explosion {
    /// Start the explosion. Returns false if it had already started.
    pub fn trigger(&mut self, now: Duration) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<Duration> {
        self.started_at
    }

    /// True once the explosion has been showing for the full duration
    pub fn is_finished(&self, now: Duration) -> bool {
        self.started_at
            .is_some_and(|at| now.saturating_sub(at) >= EXPLOSION_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_turn_from_sign() {
        assert_eq!(Turn::from_sign(-1), Turn::Clockwise);
        assert_eq!(Turn::from_sign(0), Turn::None);
        assert_eq!(Turn::from_sign(1), Turn::CounterClockwise);
        assert_eq!(Turn::from_sign(7), Turn::CounterClockwise);
        assert_eq!(Turn::CounterClockwise.sign(), 1.0);
    }

    #[test]
    fn test_drift_flips_vertical_axis() {
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0), 0.0);
        body.drift(0.5);
        assert_eq!(body.pos, Vec2::new(105.0, 95.0));
    }

    #[test]
    fn test_explosion_trigger_once() {
        let mut explosion = Explosion::default();
        assert!(!explosion.is_active());
        assert!(explosion.trigger(Duration::from_millis(100)));
        assert!(!explosion.trigger(Duration::from_millis(200)));
        assert_eq!(explosion.started_at(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_explosion_finishes_after_duration() {
        let mut explosion = Explosion::default();
        assert!(!explosion.is_finished(Duration::from_secs(10)));
        explosion.trigger(Duration::ZERO);
        assert!(!explosion.is_finished(Duration::from_millis(699)));
        assert!(explosion.is_finished(Duration::from_millis(700)));
    }

    proptest! {
        #[test]
        fn prop_explosion_keeps_first_timestamp(
            first in 0u64..1_000_000,
            second in 0u64..1_000_000,
        ) {
            let first = Duration::from_millis(first);
            let mut explosion = Explosion::default();
            prop_assert!(explosion.trigger(first));
            prop_assert!(!explosion.trigger(Duration::from_millis(second)));
            prop_assert_eq!(explosion.started_at(), Some(first));
        }
    }
}
