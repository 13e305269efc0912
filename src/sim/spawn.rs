//! Asteroid wave generation
//!
//! Asteroids are placed uniformly in the canvas, rejecting spots too close to
//! the ship. After `max_spawn_attempts` rejections the position is sampled in
//! closed form on the segment from the ship to the farthest canvas corner, so
//! spawning always terminates.

use glam::Vec2;
use rand::Rng;

use super::state::Asteroid;
use crate::tuning::Tuning;

/// Build the wave for `level`: exactly `level + asteroids_base` asteroids
pub fn spawn_wave<R: Rng>(
    rng: &mut R,
    level: u32,
    ship_pos: Vec2,
    width: f32,
    height: f32,
    tuning: &Tuning,
) -> Vec<Asteroid> {
    let count = tuning.wave_size(level);
    let speed = tuning.asteroid_speed_max;
    let radius_span = tuning.asteroid_radius_max - tuning.asteroid_radius_min;

    (0..count)
        .map(|_| {
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * 2.0 * speed,
                (rng.random::<f32>() - 0.5) * 2.0 * speed,
            );
            let radius = tuning.asteroid_radius_min + rng.random::<f32>() * radius_span;
            let safe_distance = radius * tuning.safe_spawn_multiplier;
            let pos = spawn_position(
                rng,
                ship_pos,
                safe_distance,
                width,
                height,
                tuning.max_spawn_attempts,
            );
            Asteroid { pos, vel, radius }
        })
        .collect()
}

/// Pick a canvas position at least `safe_distance` from `ship_pos`
pub fn spawn_position<R: Rng>(
    rng: &mut R,
    ship_pos: Vec2,
    safe_distance: f32,
    width: f32,
    height: f32,
    max_attempts: u32,
) -> Vec2 {
    for _ in 0..max_attempts {
        let candidate = Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height);
        if candidate.distance(ship_pos) >= safe_distance {
            return candidate;
        }
    }

    log::debug!(
        "Spawn rejection cap hit ({} attempts), placing toward farthest corner",
        max_attempts
    );

    let corner = farthest_corner(ship_pos, width, height);
    let corner_distance = corner.distance(ship_pos);
    if corner_distance < safe_distance {
        log::warn!(
            "Canvas {}x{} cannot fit safe distance {:.1} from ship; using corner",
            width,
            height,
            safe_distance
        );
        return corner;
    }

    let dir = (corner - ship_pos) / corner_distance;
    let distance = safe_distance + rng.random::<f32>() * (corner_distance - safe_distance);
    let pos = ship_pos + dir * distance;
    Vec2::new(pos.x.clamp(0.0, width), pos.y.clamp(0.0, height))
}

/// Canvas corner with the greatest distance from `pos`
fn farthest_corner(pos: Vec2, width: f32, height: f32) -> Vec2 {
    let x = if pos.x < width / 2.0 { width } else { 0.0 };
    let y = if pos.y < height / 2.0 { height } else { 0.0 };
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wave_size_grows_with_level() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = Tuning::default();
        let ship = Vec2::new(400.0, 300.0);
        assert_eq!(spawn_wave(&mut rng, 1, ship, 800.0, 600.0, &tuning).len(), 5);
        assert_eq!(spawn_wave(&mut rng, 2, ship, 800.0, 600.0, &tuning).len(), 6);
        assert_eq!(spawn_wave(&mut rng, 10, ship, 800.0, 600.0, &tuning).len(), 14);
    }

    #[test]
    fn test_asteroid_attribute_ranges() {
        let mut rng = Pcg32::seed_from_u64(99);
        let tuning = Tuning::default();
        let wave = spawn_wave(&mut rng, 20, Vec2::new(400.0, 300.0), 800.0, 600.0, &tuning);
        for a in &wave {
            assert!(a.radius >= 30.0 && a.radius < 50.0);
            assert!(a.vel.x >= -1.0 && a.vel.x < 1.0);
            assert!(a.vel.y >= -1.0 && a.vel.y < 1.0);
        }
    }

    #[test]
    fn test_farthest_corner() {
        assert_eq!(farthest_corner(Vec2::new(10.0, 10.0), 800.0, 600.0), Vec2::new(800.0, 600.0));
        assert_eq!(farthest_corner(Vec2::new(790.0, 590.0), 800.0, 600.0), Vec2::ZERO);
        assert_eq!(farthest_corner(Vec2::new(700.0, 50.0), 800.0, 600.0), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn test_fallback_honours_safe_distance() {
        // One attempt on a cramped canvas forces the closed-form path often
        let mut rng = Pcg32::seed_from_u64(5);
        let ship = Vec2::new(60.0, 60.0);
        for _ in 0..200 {
            let pos = spawn_position(&mut rng, ship, 62.0, 120.0, 120.0, 1);
            assert!(pos.distance(ship) >= 62.0 - 1e-3);
            assert!((0.0..=120.0).contains(&pos.x));
            assert!((0.0..=120.0).contains(&pos.y));
        }
    }

    #[test]
    fn test_unsatisfiable_distance_terminates_at_corner() {
        let mut rng = Pcg32::seed_from_u64(5);
        let ship = Vec2::new(40.0, 40.0);
        let pos = spawn_position(&mut rng, ship, 500.0, 100.0, 100.0, 8);
        assert_eq!(pos, Vec2::new(100.0, 100.0));
    }

    proptest! {
        #[test]
        fn prop_wave_count_and_clearance(
            seed in any::<u64>(),
            level in 1u32..12,
            ship_x in 0.0f32..=800.0,
            ship_y in 0.0f32..=600.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let tuning = Tuning::default();
            let ship = Vec2::new(ship_x, ship_y);
            let wave = spawn_wave(&mut rng, level, ship, 800.0, 600.0, &tuning);

            prop_assert_eq!(wave.len(), (level + 4) as usize);
            for a in &wave {
                prop_assert!(a.pos.distance(ship) >= 2.0 * a.radius - 1e-3);
                prop_assert!(a.pos.x >= 0.0 && a.pos.x <= 800.0);
                prop_assert!(a.pos.y >= 0.0 && a.pos.y <= 600.0);
            }
        }
    }
}
