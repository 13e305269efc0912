//! Idle/demo controller - the computer plays the game
//!
//! Produces the same [`TickInput`] a player would, so the simulation cannot
//! tell the difference. Used by the native demo runner and the in-browser
//! idle toggle.

use super::state::{Asteroid, World};
use super::tick::TickInput;
use crate::normalize_angle;

/// Heading error (radians) below which the ship counts as aimed
const AIM_TOLERANCE: f32 = 0.08;
/// Heading error below which the ship stops turning
const TURN_DEADZONE: f32 = 0.03;
/// Gap between hulls that triggers evasive thrust
const DANGER_GAP: f32 = 60.0;
/// Speed the autopilot will not thrust beyond
const CRUISE_SPEED: f32 = 1.5;

/// Decide this frame's input from the current world
pub fn drive(world: &World) -> TickInput {
    let mut input = TickInput::default();
    if world.game_over {
        return input;
    }

    let ship = &world.ship;
    let Some(target) = nearest_asteroid(world) else {
        return input;
    };

    let to_target = target.pos - ship.pos;
    let desired = to_target.y.atan2(to_target.x);
    let error = normalize_angle(desired - ship.angle);

    if error > TURN_DEADZONE {
        input.right = true;
    } else if error < -TURN_DEADZONE {
        input.left = true;
    }

    // Pulse the trigger so the fire latch re-arms between shots
    input.fire = error.abs() < AIM_TOLERANCE && world.frame % 2 == 0;

    // Threat close and we are not already pointed away: burn away from it
    let gap = to_target.length() - target.radius - ship.radius;
    let speed = ship.vel.length();
    if gap < DANGER_GAP && error.abs() > std::f32::consts::FRAC_PI_2 && speed < CRUISE_SPEED {
        input.thrust = true;
    }

    input
}

fn nearest_asteroid(world: &World) -> Option<&Asteroid> {
    let ship = world.ship.pos;
    world.asteroids.iter().min_by(|a, b| {
        let gap_a = a.pos.distance(ship) - a.radius;
        let gap_b = b.pos.distance(ship) - b.radius;
        gap_a
            .partial_cmp(&gap_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
