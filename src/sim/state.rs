//! World state and core simulation types
//!
//! Everything one frame of simulation reads or writes lives in [`World`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_wave;
use crate::tuning::Tuning;

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    /// Facing angle (radians, 0 = +x, grows clockwise on screen)
    pub angle: f32,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ship {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            angle: 0.0,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Point on the hull along the facing direction, where bullets spawn
    pub fn nose(&self) -> Vec2 {
        self.pos + crate::heading(self.angle) * self.radius
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A bullet; lives until it leaves the canvas or hits something
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Things that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired,
    /// Score after the kill was counted
    AsteroidDestroyed { score: u64 },
    WaveStarted { level: u32, asteroids: usize },
    ShipDestroyed { score: u64, level: u32 },
}

/// Ship as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub angle: f32,
    pub radius: f32,
}

/// Any circular entity as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Read-only copy of everything the renderer and HUD draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub ship: ShipView,
    pub asteroids: Vec<CircleView>,
    pub bullets: Vec<CircleView>,
    pub score: u64,
    pub level: u32,
    pub game_over: bool,
}

/// Complete game world (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Canvas size; positions wrap into [0, width] x [0, height]
    pub width: f32,
    pub height: f32,
    /// Balance constants
    pub tuning: Tuning,
    pub ship: Ship,
    /// Live asteroids (order irrelevant to gameplay but kept stable)
    pub asteroids: Vec<Asteroid>,
    /// Live bullets
    pub bullets: Vec<Bullet>,
    /// Score, +score_per_asteroid per kill
    pub score: u64,
    /// Current level (starts at 1)
    pub level: u32,
    /// One-way terminal flag
    pub game_over: bool,
    /// Fire latch: armed means the next held-fire frame shoots
    pub fire_armed: bool,
    /// Frames simulated while the game was live
    pub frame: u64,
    rng: Pcg32,
}

impl World {
    /// Create a world with the ship centred and the first wave spawned
    pub fn new(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        let ship = Ship::new(Vec2::new(width / 2.0, height / 2.0), tuning.ship_radius);
        let mut world = Self {
            seed,
            width,
            height,
            tuning,
            ship,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            level: 1,
            game_over: false,
            fire_armed: true,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        };

        world.start_wave();
        world
    }

    /// Spawn the wave for the current level, appending to the asteroid list
    pub fn start_wave(&mut self) -> GameEvent {
        let wave = spawn_wave(
            &mut self.rng,
            self.level,
            self.ship.pos,
            self.width,
            self.height,
            &self.tuning,
        );
        let count = wave.len();
        self.asteroids.extend(wave);
        log::info!("Level {} wave: {} asteroids", self.level, count);
        GameEvent::WaveStarted {
            level: self.level,
            asteroids: count,
        }
    }

    /// Copy out what the renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            ship: ShipView {
                pos: self.ship.pos,
                angle: self.ship.angle,
                radius: self.ship.radius,
            },
            asteroids: self
                .asteroids
                .iter()
                .map(|a| CircleView {
                    pos: a.pos,
                    radius: a.radius,
                })
                .collect(),
            bullets: self
                .bullets
                .iter()
                .map(|b| CircleView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            score: self.score,
            level: self.level,
            game_over: self.game_over,
        }
    }
}
