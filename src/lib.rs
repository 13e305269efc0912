//! Rock Field - A wraparound asteroid field shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, asteroids, bullets, collisions)
//! - `input`: Held-key tracking and per-frame input sampling
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Score/level/game-over text
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use input::{KeyState, LogicalKey};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 15.0;
    /// Rotation per frame while a turn key is held (radians)
    pub const TURN_RATE: f32 = 0.05;
    /// Velocity added per frame while thrusting (no drag, no cap)
    pub const THRUST_ACCEL: f32 = 0.1;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 5.0;
    pub const BULLET_RADIUS: f32 = 2.0;

    /// Asteroid radius range [min, max)
    pub const ASTEROID_RADIUS_MIN: f32 = 30.0;
    pub const ASTEROID_RADIUS_MAX: f32 = 50.0;
    /// Each velocity component is drawn from [-max, max)
    pub const ASTEROID_SPEED_MAX: f32 = 1.0;
    /// A wave at level L holds L + ASTEROIDS_BASE asteroids
    pub const ASTEROIDS_BASE: u32 = 4;
    /// Minimum spawn distance from the ship, in asteroid radii
    pub const SAFE_SPAWN_MULTIPLIER: f32 = 2.0;
    /// Uniform draws before the spawner falls back to closed-form placement
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    /// Points per destroyed asteroid
    pub const SCORE_PER_ASTEROID: u64 = 100;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a facing angle
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Wrap one coordinate into [0, extent] by teleporting to the opposite edge.
///
/// This is a single-step teleport, not a modulo: a value below zero lands
/// exactly on `extent`, a value above `extent` lands exactly on zero.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// Wrap a position into the [0, width] x [0, height] canvas
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_coordinate(pos.x, width), wrap_coordinate(pos.y, height))
}

/// True if the position lies inside the closed [0, width] x [0, height] canvas
#[inline]
pub fn in_bounds(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x >= 0.0 && pos.x <= width && pos.y >= 0.0 && pos.y <= height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_coordinate_teleports() {
        assert_eq!(wrap_coordinate(-0.5, 800.0), 800.0);
        assert_eq!(wrap_coordinate(800.5, 800.0), 0.0);
        assert_eq!(wrap_coordinate(400.0, 800.0), 400.0);
        // Edges are inside the canvas and stay put
        assert_eq!(wrap_coordinate(0.0, 800.0), 0.0);
        assert_eq!(wrap_coordinate(800.0, 800.0), 800.0);
    }

    #[test]
    fn test_in_bounds_is_closed() {
        assert!(in_bounds(Vec2::new(0.0, 0.0), 800.0, 600.0));
        assert!(in_bounds(Vec2::new(800.0, 600.0), 800.0, 600.0));
        assert!(!in_bounds(Vec2::new(801.0, 300.0), 800.0, 600.0));
        assert!(!in_bounds(Vec2::new(400.0, -0.1), 800.0, 600.0));
    }

    #[test]
    fn test_normalize_angle() {
        use std::f32::consts::PI;
        assert!((normalize_angle(-2.5 * PI) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_heading() {
        let h = heading(0.0);
        assert!((h.x - 1.0).abs() < 1e-6);
        assert!(h.y.abs() < 1e-6);

        let h = heading(std::f32::consts::FRAC_PI_2);
        assert!(h.x.abs() < 1e-6);
        assert!((h.y - 1.0).abs() < 1e-6);
    }
}
