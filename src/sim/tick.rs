//! Per-frame simulation step
//!
//! One call advances the world by exactly one animation frame. All rates in
//! [`crate::tuning::Tuning`] are per-frame, so there is no dt parameter.

use super::collision::{resolve_bullet_hits, ship_hit};
use super::state::{Bullet, GameEvent, World};
use crate::{heading, in_bounds, wrap_position};

/// Held inputs sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Turn counter-clockwise on screen (angle decreases)
    pub left: bool,
    /// Turn clockwise on screen (angle increases)
    pub right: bool,
    /// Accelerate along the facing direction
    pub thrust: bool,
    /// Fire (edge-triggered through the world's fire latch)
    pub fire: bool,
}

/// Advance the world by one frame.
///
/// Once `game_over` is set this is a no-op and returns no events.
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.game_over {
        return events;
    }

    world.frame += 1;
    let (width, height) = (world.width, world.height);

    // Rotation
    if input.left {
        world.ship.angle -= world.tuning.turn_rate;
    }
    if input.right {
        world.ship.angle += world.tuning.turn_rate;
    }

    // Thrust (no drag, no speed cap)
    if input.thrust {
        world.ship.vel += heading(world.ship.angle) * world.tuning.thrust_accel;
    }

    // Fire latch: one bullet per press, re-armed by any frame without fire
    if input.fire {
        if world.fire_armed {
            world.bullets.push(Bullet {
                pos: world.ship.nose(),
                vel: heading(world.ship.angle) * world.tuning.bullet_speed,
                radius: world.tuning.bullet_radius,
            });
            world.fire_armed = false;
            events.push(GameEvent::BulletFired);
        }
    } else {
        world.fire_armed = true;
    }

    // Integrate ship and asteroids with screen wrap
    world.ship.pos = wrap_position(world.ship.pos + world.ship.vel, width, height);
    for asteroid in &mut world.asteroids {
        asteroid.pos = wrap_position(asteroid.pos + asteroid.vel, width, height);
    }

    // Bullets fly straight and expire on leaving the canvas
    for bullet in &mut world.bullets {
        bullet.pos += bullet.vel;
    }
    world.bullets.retain(|b| in_bounds(b.pos, width, height));

    // Bullet vs asteroid
    let hits = resolve_bullet_hits(&mut world.asteroids, &mut world.bullets);
    for _ in 0..hits.kills {
        world.score = world.score.saturating_add(world.tuning.score_per_asteroid);
        events.push(GameEvent::AsteroidDestroyed { score: world.score });
    }

    // Wave cleared
    if world.asteroids.is_empty() {
        world.level += 1;
        events.push(world.start_wave());
    }

    // Ship vs asteroid: a single touch ends the run
    if ship_hit(&world.ship, &world.asteroids).is_some() {
        world.game_over = true;
        log::info!(
            "Ship destroyed on level {} with score {} after {} frames",
            world.level,
            world.score,
            world.frame
        );
        events.push(GameEvent::ShipDestroyed {
            score: world.score,
            level: world.level,
        });
    }

    events
}
