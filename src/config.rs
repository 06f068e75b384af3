//! Session tuning
//!
//! All numeric policy in one serde-backed struct so hosts and tests can
//! adjust it without recompiling. Defaults come from `consts` and match the
//! shipped game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CORRECT_POINTS, GOAL_REROLL_CHANCE, SESSION_DURATION, SPAWN_INTERVAL_MIN,
    SPAWN_INTERVAL_START, SPAWN_INTERVAL_STEP, TARGET_LIFETIME, WRONG_PENALTY,
};
use crate::sim::SpawnBounds;

/// Tunable session parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session length in seconds
    pub session_duration: f32,
    /// Seconds a target stays tappable
    pub target_lifetime: f32,
    pub spawn_interval_start: f32,
    pub spawn_interval_min: f32,
    pub spawn_interval_step: f32,
    pub spawn_bounds: SpawnBounds,
    /// Points for tapping a goal-colored target
    pub correct_points: u32,
    /// Points lost on a wrong tap (the score floors at zero)
    pub wrong_penalty: u32,
    /// Chance the goal color re-rolls after a correct tap
    pub goal_reroll_chance: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_duration: SESSION_DURATION,
            target_lifetime: TARGET_LIFETIME,
            spawn_interval_start: SPAWN_INTERVAL_START,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            spawn_bounds: SpawnBounds::default(),
            correct_points: CORRECT_POINTS,
            wrong_penalty: WRONG_PENALTY,
            goal_reroll_chance: GOAL_REROLL_CHANCE,
        }
    }
}

impl SessionConfig {
    /// Load from a JSON file, falling back to defaults on any failure
    ///
    /// The core has no recoverable I/O errors; a missing or malformed file
    /// is logged and the shipped defaults are used.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded session config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save config {}: {err}", path.display());
                } else {
                    log::info!("config saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize config: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_game() {
        let config = SessionConfig::default();
        assert_eq!(config.session_duration, 60.0);
        assert_eq!(config.target_lifetime, 3.0);
        assert_eq!(config.spawn_interval_start, 1.0);
        assert_eq!(config.spawn_interval_min, 0.3);
        assert_eq!(config.correct_points, 10);
        assert_eq!(config.wrong_penalty, 5);
        assert_eq!(config.goal_reroll_chance, 0.3);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = SessionConfig::default();
        config.session_duration = 30.0;
        config.goal_reroll_chance = 0.5;

        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.session_duration, 30.0);
        assert_eq!(back.goal_reroll_chance, 0.5);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"correct_points": 25}"#).unwrap();
        assert_eq!(config.correct_points, 25);
        assert_eq!(config.session_duration, 60.0);
        assert_eq!(config.wrong_penalty, 5);
    }
}
