//! Keyboard mapping
//!
//! Translates key-down/key-up edges into ship controls. Rotation and thrust
//! follow the key state; the fire key shoots once per press, so key-repeat
//! events while it is held are ignored.

use crate::sim::Simulation;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Rotate counter-clockwise
    Left,
    /// Rotate clockwise
    Right,
    /// Engine
    Up,
    Fire,
}

impl Key {
    /// Map a browser `keyCode` (arrow keys and space)
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            32 => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Edge state for one keyboard
#[derive(Debug, Default)]
pub struct Keyboard {
    fire_down: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press (including key-repeat events).
    ///
    /// Returns true if the press launched a projectile.
    pub fn key_down(&mut self, sim: &mut Simulation, key: Key) -> bool {
        match key {
            Key::Left => sim.set_rotation_intent(1),
            Key::Right => sim.set_rotation_intent(-1),
            Key::Up => sim.set_thrusting(true),
            Key::Fire => {
                if self.fire_down {
                    return false;
                }
                self.fire_down = true;
                return sim.fire();
            }
        }
        false
    }

    /// Releasing either arrow stops rotation, even if the other is still held
    pub fn key_up(&mut self, sim: &mut Simulation, key: Key) {
        match key {
            Key::Left | Key::Right => sim.set_rotation_intent(0),
            Key::Up => sim.set_thrusting(false),
            Key::Fire => self.fire_down = false,
        }
    }
}
