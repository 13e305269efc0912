//! Game balance constants
//!
//! Every tunable number the simulation reads lives here. Defaults come from
//! [`crate::consts`]; a JSON document can override any subset of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating tuning
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// File could not be read (native only)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value is out of range
    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Rotation per frame (radians)
    pub turn_rate: f32,
    /// Velocity gained per thrusting frame
    pub thrust_accel: f32,
    /// Ship collision radius; bullets spawn this far ahead of the ship
    pub ship_radius: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_radius: f32,

    // === Asteroids ===
    pub asteroid_radius_min: f32,
    pub asteroid_radius_max: f32,
    /// Each velocity component is uniform in [-max, max)
    pub asteroid_speed_max: f32,
    /// Wave size is level + asteroids_base
    pub asteroids_base: u32,
    /// Spawn no closer to the ship than this many asteroid radii
    pub safe_spawn_multiplier: f32,
    /// Uniform draws before closed-form placement kicks in
    pub max_spawn_attempts: u32,

    // === Scoring ===
    pub score_per_asteroid: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            turn_rate: TURN_RATE,
            thrust_accel: THRUST_ACCEL,
            ship_radius: SHIP_RADIUS,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,

            asteroid_radius_min: ASTEROID_RADIUS_MIN,
            asteroid_radius_max: ASTEROID_RADIUS_MAX,
            asteroid_speed_max: ASTEROID_SPEED_MAX,
            asteroids_base: ASTEROIDS_BASE,
            safe_spawn_multiplier: SAFE_SPAWN_MULTIPLIER,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,

            score_per_asteroid: SCORE_PER_ASTEROID,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Largest accepted `asteroids_base`
    pub const MAX_ASTEROIDS_BASE: u32 = 1000;
    /// Largest accepted `score_per_asteroid`
    pub const MAX_SCORE_PER_ASTEROID: u64 = 1_000_000;

    /// Number of asteroids in the wave for `level`
    pub fn wave_size(&self, level: u32) -> usize {
        level.saturating_add(self.asteroids_base) as usize
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a finite positive number",
                })
            }
        }

        positive("turn_rate", self.turn_rate)?;
        positive("thrust_accel", self.thrust_accel)?;
        positive("ship_radius", self.ship_radius)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("bullet_radius", self.bullet_radius)?;
        positive("asteroid_radius_min", self.asteroid_radius_min)?;
        positive("asteroid_radius_max", self.asteroid_radius_max)?;
        positive("asteroid_speed_max", self.asteroid_speed_max)?;
        positive("safe_spawn_multiplier", self.safe_spawn_multiplier)?;

        if self.asteroid_radius_min >= self.asteroid_radius_max {
            return Err(TuningError::Invalid {
                field: "asteroid_radius_max",
                reason: "must be greater than asteroid_radius_min",
            });
        }
        if self.asteroids_base > Self::MAX_ASTEROIDS_BASE {
            return Err(TuningError::Invalid {
                field: "asteroids_base",
                reason: "must be at most 1000",
            });
        }
        if self.score_per_asteroid > Self::MAX_SCORE_PER_ASTEROID {
            return Err(TuningError::Invalid {
                field: "score_per_asteroid",
                reason: "must be at most 1000000",
            });
        }
        if self.max_spawn_attempts == 0 {
            return Err(TuningError::Invalid {
                field: "max_spawn_attempts",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Load tuning from the page's `<script id="tuning">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        /// Element holding an optional JSON override in the page
        const ELEMENT_ID: &str = "tuning";

        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring page tuning: {}", e);
                Self::default()
            }),
            _ => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.wave_size(1), 5);
        assert_eq!(tuning.wave_size(3), 7);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "bullet_speed": 8.0 }"#).unwrap();
        assert_eq!(tuning.bullet_speed, 8.0);
        assert_eq!(tuning.turn_rate, TURN_RATE);
        assert_eq!(tuning.score_per_asteroid, SCORE_PER_ASTEROID);
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning {
            asteroids_base: 6,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ turn_rate: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_inverted_radius_range_rejected() {
        let err = Tuning::from_json(
            r#"{ "asteroid_radius_min": 50.0, "asteroid_radius_max": 30.0 }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "asteroid_radius_max",
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        assert!(Tuning::from_json(r#"{ "turn_rate": 0.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "bullet_speed": -5.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "max_spawn_attempts": 0 }"#).is_err());
    }

    #[test]
    fn test_oversized_counts_rejected() {
        let err = Tuning::from_json(r#"{ "asteroids_base": 4294967295 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "asteroids_base",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "score_per_asteroid": 18446744073709551615 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "score_per_asteroid",
                ..
            }
        ));

        let tuning = Tuning::from_json(r#"{ "asteroids_base": 1000, "score_per_asteroid": 1000000 }"#)
            .unwrap();
        assert_eq!(tuning.wave_size(1), 1001);
    }

    #[test]
    fn test_wave_size_saturates() {
        let tuning = Tuning {
            asteroids_base: u32::MAX,
            ..Default::default()
        };
        assert_eq!(tuning.wave_size(7), u32::MAX as usize);
    }
}
