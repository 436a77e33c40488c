//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay render-agnostic:
//! - Time only advances through `Simulation::advance`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod obstacle;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use collision::{WrapResult, within_box, wrap_position};
pub use entity::{Body, Explosion, Turn};
pub use obstacle::{Obstacle, ObstaclePhase};
pub use projectile::Projectile;
pub use ship::{Ship, ShipPhase, ShipTuning};
pub use state::{
    Counters, GamePhase, ObstacleView, ProjectileView, ShipView, Simulation, Snapshot,
};
