//! Space Wars entry point
//!
//! Headless driver: loads settings, lets the autopilot play one session at a
//! fixed frame rate and prints the outcome.

use std::path::Path;

use space_wars::Settings;
use space_wars::autopilot::{self, Controls};
use space_wars::input::{Key, Keyboard};
use space_wars::sim::{Simulation, Turn};

/// Replays autopilot intent as key presses and releases
#[derive(Default)]
struct KeyDriver {
    keyboard: Keyboard,
    held: Controls,
    fire_held: bool,
}

impl KeyDriver {
    fn turn_key(turn: Turn) -> Option<Key> {
        match turn {
            Turn::CounterClockwise => Some(Key::Left),
            Turn::Clockwise => Some(Key::Right),
            Turn::None => None,
        }
    }

    fn apply(&mut self, sim: &mut Simulation, controls: Controls) {
        if controls.turn != self.held.turn {
            if let Some(key) = Self::turn_key(self.held.turn) {
                self.keyboard.key_up(sim, key);
            }
            if let Some(key) = Self::turn_key(controls.turn) {
                self.keyboard.key_down(sim, key);
            }
        }
        if controls.thrust != self.held.thrust {
            if controls.thrust {
                self.keyboard.key_down(sim, Key::Up);
            } else {
                self.keyboard.key_up(sim, Key::Up);
            }
        }
        // Shots are edge-triggered: a held fire intent alternates press and release
        if self.fire_held {
            self.keyboard.key_up(sim, Key::Fire);
            self.fire_held = false;
        } else if controls.fire {
            self.keyboard.key_down(sim, Key::Fire);
            self.fire_held = true;
        }
        self.held = controls;
    }
}

fn main() {
    env_logger::init();
    log::info!("Space Wars (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Using seed {}", seed);

    let mut sim = Simulation::new(settings.playfield(), seed);
    sim.start(settings.num_obstacles, settings.difficulty());

    let dt = settings.frame_dt();
    let max_frames = (settings.max_seconds / dt).ceil() as u64;
    let mut keys = KeyDriver::default();
    let mut frames = 0u64;

    while !sim.is_terminal() && frames < max_frames {
        let controls = autopilot::steer(&sim);
        keys.apply(&mut sim, controls);
        sim.advance(dt);
        frames += 1;
    }

    if let Ok(json) = serde_json::to_string(&sim.snapshot()) {
        log::debug!("Final snapshot: {}", json);
    }

    let counters = sim.counters();
    if sim.is_terminal() {
        println!("{}", sim.phase().message());
    } else {
        log::warn!("Stopped after {} frames without a result", frames);
        println!("Time is up");
    }
    println!("Shots fired: {}", counters.shots_fired);
    println!("Asteroids shot down: {}", counters.obstacles_destroyed);
}
