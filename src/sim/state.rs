//! Session state and the simulation that owns it
//!
//! The `Simulation` is the single owner of the ship, obstacles and projectiles.
//! Callers drive it through `start`, the control setters, `fire` and
//! `advance` (see `tick.rs`), and read it through accessors or `snapshot`.

use std::time::Duration;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Turn;
use super::obstacle::{Obstacle, ObstaclePhase};
use super::projectile::Projectile;
use super::ship::{Ship, ShipPhase, ShipTuning};
use crate::Playfield;
use crate::consts::*;

/// Overall outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Every obstacle destroyed with the ship intact
    Won,
    /// Ship destroyed
    Lost,
}

impl GamePhase {
    /// Won and Lost are final; the driver should stop advancing
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }

    pub fn message(&self) -> &'static str {
        match self {
            GamePhase::Playing => "",
            GamePhase::Won => "Yay, you won",
            GamePhase::Lost => "Oh no, you lost",
        }
    }
}

/// Session score counters; both only ever increase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub shots_fired: u32,
    pub obstacles_destroyed: u32,
}

pub struct Simulation {
    pub(crate) field: Playfield,
    pub(crate) ship: Ship,
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) counters: Counters,
    pub(crate) phase: GamePhase,
    /// Simulated time since `start`
    pub(crate) clock: Duration,
    rng: Pcg32,
}

impl Simulation {
    /// Create an idle simulation. Call `start` to begin a session.
    pub fn new(field: Playfield, seed: u64) -> Self {
        Self {
            field,
            ship: Ship::new(field.center(), ShipTuning::default()),
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            counters: Counters::default(),
            phase: GamePhase::Playing,
            clock: Duration::ZERO,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a fresh session.
    ///
    /// Obstacles are placed by rejection sampling: any candidate near the ship
    /// is discarded and redrawn. There is no retry cap, so a field too small
    /// for `num_obstacles` at the sampled sizes can loop forever.
    pub fn start(&mut self, num_obstacles: usize, difficulty: f32) {
        self.counters = Counters::default();
        self.clock = Duration::ZERO;
        self.projectiles.clear();
        self.ship = Ship::new(self.field.center(), ShipTuning::scaled(difficulty));
        self.obstacles = self.spawn_obstacles(num_obstacles, difficulty);
        self.phase = GamePhase::Playing;
        self.refresh_phase();

        log::info!(
            "Session started: {} obstacles, difficulty {}, field {}x{}",
            num_obstacles,
            difficulty,
            self.field.width,
            self.field.height
        );
    }

    fn spawn_obstacles(&mut self, num_obstacles: usize, difficulty: f32) -> Vec<Obstacle> {
        let mut obstacles = Vec::with_capacity(num_obstacles);
        let mut rejected = 0u64;

        while obstacles.len() < num_obstacles {
            let radius = self
                .rng
                .random_range(OBSTACLE_MIN_RADIUS..OBSTACLE_MAX_RADIUS);
            let vel = Vec2::new(
                self.rng.random_range(-OBSTACLE_MAX_DRIFT..OBSTACLE_MAX_DRIFT),
                self.rng.random_range(-OBSTACLE_MAX_DRIFT..OBSTACLE_MAX_DRIFT),
            ) * difficulty;
            let pos = Vec2::new(
                self.rng.random::<f32>() * self.field.width,
                self.rng.random::<f32>() * self.field.height,
            );

            let candidate = Obstacle::new(pos, vel, radius);
            if candidate.is_near(&self.ship.body) {
                rejected += 1;
                continue;
            }
            obstacles.push(candidate);
        }

        if rejected > 0 {
            log::debug!("Rejected {} obstacle placements near the ship", rejected);
        }
        obstacles
    }

    // === Controls ===

    pub fn set_turn(&mut self, turn: Turn) {
        self.ship.set_turn(turn);
    }

    /// Raw -1/0/+1 rotation intent
    pub fn set_rotation_intent(&mut self, intent: i32) {
        self.set_turn(Turn::from_sign(intent));
    }

    pub fn set_thrusting(&mut self, thrusting: bool) {
        self.ship.set_thrusting(thrusting);
    }

    /// Fire once. Ignored while reloading or after the ship has exploded.
    ///
    /// Returns true if a projectile was launched.
    pub fn fire(&mut self) -> bool {
        if !self.ship.in_play() {
            return false;
        }
        match self.ship.fire_weapon(self.clock) {
            Some(projectile) => {
                self.projectiles.push(projectile);
                self.counters.shots_fired += 1;
                log::debug!("Shot {} fired", self.counters.shots_fired);
                true
            }
            None => false,
        }
    }

    // === Accessors ===

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Simulated time since the session started
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Owned, serializable view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ship: ShipView {
                pos: self.ship.body.pos,
                direction: self.ship.body.direction,
                length: self.ship.length,
                width: self.ship.width,
                thrusting: self.ship.thrusting,
                phase: self.ship.phase(),
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    pos: o.body.pos,
                    radius: o.radius,
                    phase: o.phase(),
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pos: p.body.pos,
                    direction: p.body.direction,
                })
                .collect(),
            counters: self.counters,
            phase: self.phase,
        }
    }

    /// Won iff the field is clear and the ship never exploded; Lost iff the
    /// ship has been removed.
    pub(super) fn refresh_phase(&mut self) {
        let next = if !self.ship.body.alive {
            GamePhase::Lost
        } else if self.obstacles.is_empty() && self.ship.in_play() {
            GamePhase::Won
        } else {
            GamePhase::Playing
        };

        if next != self.phase {
            log::info!(
                "Game {:?}: {} shots fired, {} obstacles destroyed",
                next,
                self.counters.shots_fired,
                self.counters.obstacles_destroyed
            );
            self.phase = next;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub direction: f32,
    pub length: f32,
    pub width: f32,
    pub thrusting: bool,
    pub phase: ShipPhase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub pos: Vec2,
    pub radius: f32,
    pub phase: ObstaclePhase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub direction: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub ship: ShipView,
    pub obstacles: Vec<ObstacleView>,
    pub projectiles: Vec<ProjectileView>,
    pub counters: Counters,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_places_ship_and_obstacles() {
        let mut sim = Simulation::new(Playfield::default(), 7);
        sim.start(DEFAULT_OBSTACLES, 1.0);

        assert_eq!(sim.ship().body.pos, Vec2::new(250.0, 250.0));
        assert_eq!(sim.obstacles().len(), DEFAULT_OBSTACLES);
        assert!(sim.projectiles().is_empty());
        assert_eq!(sim.phase(), GamePhase::Playing);
        for obstacle in sim.obstacles() {
            assert!(!obstacle.is_near(&sim.ship().body));
            assert!((OBSTACLE_MIN_RADIUS..OBSTACLE_MAX_RADIUS).contains(&obstacle.radius));
            assert!(sim.field().contains(obstacle.body.pos));
            assert!(obstacle.body.vel.x.abs() <= OBSTACLE_MAX_DRIFT);
            assert!(obstacle.body.vel.y.abs() <= OBSTACLE_MAX_DRIFT);
        }
    }

    #[test]
    fn test_difficulty_scales_spawn_and_ship() {
        let mut sim = Simulation::new(Playfield::default(), 7);
        sim.start(20, 3.0);
        assert_eq!(sim.ship().tuning.max_speed, 450.0);
        for obstacle in sim.obstacles() {
            assert!(obstacle.body.vel.x.abs() <= OBSTACLE_MAX_DRIFT * 3.0);
        }
    }

    #[test]
    fn test_no_obstacles_is_immediate_win() {
        let mut sim = Simulation::new(Playfield::default(), 1);
        sim.start(0, 1.0);
        assert_eq!(sim.phase(), GamePhase::Won);
        assert!(sim.is_terminal());
    }

    #[test]
    fn test_fire_twice_within_reload() {
        let mut sim = Simulation::new(Playfield::default(), 1);
        sim.start(3, 1.0);
        assert!(sim.fire());
        assert!(!sim.fire());
        assert_eq!(sim.projectiles().len(), 1);
        assert_eq!(sim.counters().shots_fired, 1);
    }

    #[test]
    fn test_start_resets_counters() {
        let mut sim = Simulation::new(Playfield::default(), 1);
        sim.start(3, 1.0);
        sim.fire();
        sim.start(3, 1.0);
        assert_eq!(sim.counters(), Counters::default());
        assert!(sim.projectiles().is_empty());
        assert_eq!(sim.clock(), Duration::ZERO);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = Simulation::new(Playfield::default(), 42);
        let mut b = Simulation::new(Playfield::default(), 42);
        a.start(10, 1.0);
        b.start(10, 1.0);
        for (oa, ob) in a.obstacles().iter().zip(b.obstacles()) {
            assert_eq!(oa.body.pos, ob.body.pos);
            assert_eq!(oa.radius, ob.radius);
        }
    }

    #[test]
    fn test_controls_reach_ship() {
        let mut sim = Simulation::new(Playfield::default(), 1);
        sim.start(1, 1.0);
        sim.set_rotation_intent(-1);
        sim.set_thrusting(true);
        assert_eq!(sim.ship().body.turn, Turn::Clockwise);
        assert!(sim.ship().thrusting);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut sim = Simulation::new(Playfield::default(), 3);
        sim.start(2, 1.0);
        sim.fire();
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.obstacles.len(), 2);
        assert_eq!(snapshot.projectiles.len(), 1);
        assert_eq!(snapshot.ship.phase, ShipPhase::Flying);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"shots_fired\":1"));
        assert!(json.contains("\"Playing\""));
    }
}
