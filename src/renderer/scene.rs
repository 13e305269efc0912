//! Snapshot to triangles
//!
//! Geometry is built in canvas pixels (origin top-left, y down) and mapped to
//! NDC just before upload.

use glam::{Mat2, Vec2};

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::Snapshot;

/// Outline width in pixels
const STROKE: f32 = 1.5;
/// Circle tessellation
const ASTEROID_SEGMENTS: u32 = 32;
const BULLET_SEGMENTS: u32 = 8;

/// Ship hull in local space: nose along +x, two rear corners
const HULL: [Vec2; 3] = [
    Vec2::new(15.0, 0.0),
    Vec2::new(-10.0, -10.0),
    Vec2::new(-10.0, 10.0),
];

/// Map canvas pixels to normalized device coordinates
#[inline]
pub fn canvas_to_ndc(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(pos.x / width * 2.0 - 1.0, 1.0 - pos.y / height * 2.0)
}

/// Ship hull corners in canvas space
pub fn ship_hull(pos: Vec2, angle: f32) -> [Vec2; 3] {
    let rot = Mat2::from_angle(angle);
    HULL.map(|p| pos + rot * p)
}

/// All triangles for one frame, in canvas pixels
pub fn build_scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let ship_color = if snapshot.game_over {
        colors::WRECK
    } else {
        colors::SHIP
    };
    let hull = ship_hull(snapshot.ship.pos, snapshot.ship.angle);
    vertices.extend(shapes::closed_outline(&hull, STROKE, ship_color));

    for asteroid in &snapshot.asteroids {
        vertices.extend(shapes::ring(
            asteroid.pos,
            asteroid.radius,
            STROKE,
            colors::ASTEROID,
            ASTEROID_SEGMENTS,
        ));
    }

    for bullet in &snapshot.bullets {
        vertices.extend(shapes::circle(
            bullet.pos,
            bullet.radius,
            colors::BULLET,
            BULLET_SEGMENTS,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, World};
    use crate::tuning::Tuning;

    #[test]
    fn test_canvas_to_ndc_corners() {
        assert_eq!(canvas_to_ndc(Vec2::ZERO, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(canvas_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(canvas_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn test_ship_hull_rotates_with_angle() {
        let hull = ship_hull(Vec2::new(100.0, 100.0), 0.0);
        assert!((hull[0] - Vec2::new(115.0, 100.0)).length() < 1e-4);

        // Facing +y (down on screen)
        let hull = ship_hull(Vec2::new(100.0, 100.0), std::f32::consts::FRAC_PI_2);
        assert!((hull[0] - Vec2::new(100.0, 115.0)).length() < 1e-4);
    }

    #[test]
    fn test_scene_vertex_budget() {
        let mut world = World::new(9, 800.0, 600.0, Tuning::default());
        world.bullets.push(Bullet {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::ZERO,
            radius: 2.0,
        });
        let snapshot = world.snapshot();
        let verts = build_scene(&snapshot);

        let expected = 3 * 6
            + snapshot.asteroids.len() * (ASTEROID_SEGMENTS as usize) * 6
            + (BULLET_SEGMENTS as usize) * 3;
        assert_eq!(verts.len(), expected);
    }

    #[test]
    fn test_wreck_color_after_game_over() {
        let mut world = World::new(9, 800.0, 600.0, Tuning::default());
        world.asteroids.clear();
        world.game_over = true;
        let verts = build_scene(&world.snapshot());
        assert!(verts.iter().all(|v| v.color == colors::WRECK));
    }
}
