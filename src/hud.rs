//! HUD text
//!
//! The HUD lives in DOM elements over the canvas; this builds the strings so
//! the wording is shared with the native runner and covered by tests.

use crate::sim::Snapshot;

/// Text for every HUD element in one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub level: String,
    /// Game-over banner and final score, present only once the run ended
    pub game_over: Option<(String, String)>,
}

impl HudText {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            score: format!("Score: {}", snapshot.score),
            level: format!("Level: {}", snapshot.level),
            game_over: snapshot.game_over.then(|| {
                (
                    "Game Over".to_string(),
                    format!("Your Score: {}", snapshot.score),
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::World;
    use crate::tuning::Tuning;

    #[test]
    fn test_live_hud() {
        let mut world = World::new(1, 800.0, 600.0, Tuning::default());
        world.score = 1200;
        world.level = 3;
        let hud = HudText::from_snapshot(&world.snapshot());
        assert_eq!(hud.score, "Score: 1200");
        assert_eq!(hud.level, "Level: 3");
        assert_eq!(hud.game_over, None);
    }

    #[test]
    fn test_game_over_banner() {
        let mut world = World::new(1, 800.0, 600.0, Tuning::default());
        world.score = 700;
        world.game_over = true;
        let hud = HudText::from_snapshot(&world.snapshot());
        assert_eq!(
            hud.game_over,
            Some(("Game Over".to_string(), "Your Score: 700".to_string()))
        );
    }
}
