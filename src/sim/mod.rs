//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per animation frame, all rates per frame
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{HitReport, circles_overlap, resolve_bullet_hits, ship_hit};
pub use spawn::{spawn_position, spawn_wave};
pub use state::{
    Asteroid, Bullet, CircleView, GameEvent, Ship, ShipView, Snapshot, World,
};
pub use tick::{TickInput, tick};
