//! Per-frame simulation step
//!
//! `advance` runs the whole frame in a fixed order: ship, projectiles,
//! obstacles with their collisions, sweep, then the game phase.

use super::state::Simulation;
use crate::seconds_to_duration;

impl Simulation {
    /// Advance the session by `dt` seconds of wall-clock time.
    ///
    /// A negative or NaN `dt` leaves the state untouched. Terminal phases are
    /// not enforced here; the driver stops calling once `is_terminal()`.
    pub fn advance(&mut self, dt: f32) {
        let Some(step) = seconds_to_duration(dt) else {
            log::warn!("Ignoring frame with invalid dt {}", dt);
            return;
        };
        self.clock += step;
        let now = self.clock;
        let field = self.field;

        // Ship
        if self.ship.body.alive {
            self.ship.advance_physics(dt, &field);
            if self.ship.explosion_finished(now) {
                self.ship.body.mark_for_removal();
                log::debug!("Ship removed");
            }
        }

        // Projectiles
        for projectile in self.projectiles.iter_mut() {
            projectile.advance_physics(dt, &field);
        }

        // Obstacles and their collisions
        let Simulation {
            ship,
            obstacles,
            projectiles,
            counters,
            ..
        } = self;

        for obstacle in obstacles.iter_mut() {
            obstacle.advance_physics(dt, &field);

            if obstacle.explosion_finished(now) {
                obstacle.body.mark_for_removal();
                continue;
            }

            for projectile in projectiles.iter_mut().filter(|p| p.in_flight()) {
                // Only the first hit counts; later shots pass through the debris
                if obstacle.is_overlapping(&projectile.body) && obstacle.explode(now) {
                    counters.obstacles_destroyed += 1;
                    projectile.body.mark_for_removal();
                    log::debug!(
                        "Obstacle destroyed ({} total)",
                        counters.obstacles_destroyed
                    );
                }
            }

            if ship.body.alive && obstacle.is_overlapping(&ship.body) && ship.explode(now) {
                log::debug!("Ship exploded at {:?}", now);
            }
        }

        // Sweep
        projectiles.retain(|p| p.body.alive);
        obstacles.retain(|o| o.body.alive);

        self.refresh_phase();
    }
}
