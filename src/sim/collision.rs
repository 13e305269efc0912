//! Circle overlap tests and the bullet/asteroid/ship collision passes
//!
//! Hits are recorded by marking indices first and compacting each list once
//! afterwards, so removal never shifts an index that is still being scanned.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};

/// Strict circle overlap: centres closer than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Result of a bullet/asteroid pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitReport {
    /// Asteroids destroyed (each consumed exactly one bullet)
    pub kills: usize,
}

/// Resolve bullet/asteroid hits.
///
/// Asteroids are scanned from the back of the list; for each one, live
/// bullets are scanned from the back and the first overlapping bullet is
/// consumed together with the asteroid. An asteroid consumes at most one
/// bullet per pass and a consumed bullet cannot hit a second asteroid.
pub fn resolve_bullet_hits(asteroids: &mut Vec<Asteroid>, bullets: &mut Vec<Bullet>) -> HitReport {
    let mut asteroid_alive = vec![true; asteroids.len()];
    let mut bullet_alive = vec![true; bullets.len()];
    let mut kills = 0;

    for (ai, asteroid) in asteroids.iter().enumerate().rev() {
        let hit = bullets
            .iter()
            .enumerate()
            .rev()
            .filter(|(bi, _)| bullet_alive[*bi])
            .find(|(_, b)| circles_overlap(asteroid.pos, asteroid.radius, b.pos, b.radius))
            .map(|(bi, _)| bi);

        if let Some(bi) = hit {
            bullet_alive[bi] = false;
            asteroid_alive[ai] = false;
            kills += 1;
        }
    }

    if kills > 0 {
        compact(asteroids, &asteroid_alive);
        compact(bullets, &bullet_alive);
    }

    HitReport { kills }
}

/// Index of the first asteroid touching the ship, if any
pub fn ship_hit(ship: &Ship, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|a| circles_overlap(a.pos, a.radius, ship.pos, ship.radius))
}

/// Keep only the items whose mark is set, preserving order
fn compact<T>(items: &mut Vec<T>, keep: &[bool]) {
    let mut marks = keep.iter();
    items.retain(|_| marks.next().copied().unwrap_or(true));
}
