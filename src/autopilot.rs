//! Demo controller
//!
//! Plays the game through the same control signals a keyboard layer would
//! produce: pick the nearest intact obstacle, turn toward it, shoot when lined
//! up, and close the distance when it is far away.

use crate::normalize_degrees;
use crate::sim::{Simulation, Turn};

/// Degrees of misalignment within which the autopilot stops turning
const AIM_TOLERANCE: f32 = 3.0;
/// Degrees of misalignment within which it fires
const FIRE_TOLERANCE: f32 = 8.0;
/// Degrees of misalignment within which it thrusts
const THRUST_TOLERANCE: f32 = 20.0;
/// Targets further than this (pixels) are approached
const APPROACH_DISTANCE: f32 = 160.0;
/// Speed (pixels per second) above which the autopilot coasts
const CRUISE_SPEED: f32 = 60.0;

/// Control signals for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    pub turn: Turn,
    pub thrust: bool,
    /// Request a single shot this frame
    pub fire: bool,
}

/// Signed difference `to - from` in degrees, in (-180, 180]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    let delta = normalize_degrees(to - from);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Decide this frame's controls
pub fn steer(sim: &Simulation) -> Controls {
    let ship = sim.ship();
    if !ship.in_play() {
        return Controls::default();
    }

    // Shots do not wrap, so aim along the direct line only
    let target = sim
        .obstacles()
        .iter()
        .filter(|o| !o.is_exploded())
        .map(|o| o.body.pos - ship.body.pos)
        .min_by(|a, b| {
            a.length_squared()
                .partial_cmp(&b.length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(delta) = target else {
        return Controls::default();
    };

    // Screen y grows downward; headings are measured with y up
    let bearing = normalize_degrees((-delta.y).atan2(delta.x).to_degrees());
    let error = angle_delta(ship.body.direction, bearing);

    let turn = if error > AIM_TOLERANCE {
        Turn::CounterClockwise
    } else if error < -AIM_TOLERANCE {
        Turn::Clockwise
    } else {
        Turn::None
    };

    Controls {
        turn,
        thrust: delta.length() > APPROACH_DISTANCE
            && error.abs() < THRUST_TOLERANCE
            && ship.body.vel.length() < CRUISE_SPEED,
        fire: error.abs() < FIRE_TOLERANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::Playfield;
    use crate::sim::{GamePhase, Obstacle};

    #[test]
    fn test_angle_delta() {
        assert!((angle_delta(350.0, 10.0) - 20.0).abs() < 1e-3);
        assert!((angle_delta(10.0, 350.0) + 20.0).abs() < 1e-3);
        assert!((angle_delta(0.0, 180.0) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_idle_without_targets() {
        let mut sim = Simulation::new(Playfield::default(), 5);
        sim.start(0, 1.0);
        assert_eq!(steer(&sim), Controls::default());
    }

    #[test]
    fn test_aims_at_nearest_obstacle() {
        let mut sim = Simulation::new(Playfield::default(), 5);
        sim.start(0, 1.0);
        // Directly above the ship on screen: bearing 90 degrees
        sim.obstacles = vec![Obstacle::new(Vec2::new(250.0, 100.0), Vec2::ZERO, 10.0)];

        let controls = steer(&sim);
        assert_eq!(controls.turn, Turn::CounterClockwise);
        assert!(!controls.fire);

        sim.ship.body.direction = 89.0;
        let controls = steer(&sim);
        assert_eq!(controls.turn, Turn::None);
        assert!(controls.fire);
    }

    #[test]
    fn test_autopilot_plays_consistently() {
        let mut sim = Simulation::new(Playfield::default(), 11);
        sim.start(3, 1.0);

        let dt = 1.0 / 60.0;
        for _ in 0..(60 * 180) {
            if sim.is_terminal() {
                break;
            }
            let controls = steer(&sim);
            sim.set_turn(controls.turn);
            sim.set_thrusting(controls.thrust);
            if controls.fire {
                sim.fire();
            }
            sim.advance(dt);
        }

        assert!(sim.counters().shots_fired >= sim.counters().obstacles_destroyed);
        if sim.phase() == GamePhase::Won {
            assert_eq!(sim.counters().obstacles_destroyed, 3);
        }
    }
}
