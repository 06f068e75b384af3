//! Color Rush - a timed color-matching tap game
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (spawning, target lifecycle, scoring)
//! - `ui`: Sink traits the host implements for presentation and HUD display
//! - `config`: Data-driven session tuning

pub mod config;
pub mod sim;
pub mod ui;

pub use config::SessionConfig;
pub use sim::{ColorId, Phase, SessionController, Spawner, Target};

/// Game configuration constants
pub mod consts {
    /// Fixed demo timestep (60 Hz)
    pub const DEMO_DT: f32 = 1.0 / 60.0;

    /// Session length in seconds
    pub const SESSION_DURATION: f32 = 60.0;

    /// Seconds a target stays alive
    pub const TARGET_LIFETIME: f32 = 3.0;
    /// Fraction of the lifetime after which the fade warning pulses
    pub const FADE_WINDOW_FRAC: f32 = 0.7;
    /// Rate of the fade pulse (radians per second of age)
    pub const FADE_PULSE_RATE: f32 = 10.0;

    /// Spawner defaults
    pub const SPAWN_INTERVAL_START: f32 = 1.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.3;
    /// Interval shrink per spawn (difficulty ramp)
    pub const SPAWN_INTERVAL_STEP: f32 = 0.01;

    /// Spawn area (pixels, arena-centered coordinates)
    pub const SPAWN_MIN_X: f32 = -250.0;
    pub const SPAWN_MAX_X: f32 = 250.0;
    pub const SPAWN_MIN_Y: f32 = -400.0;
    pub const SPAWN_MAX_Y: f32 = 400.0;

    /// Scoring
    pub const CORRECT_POINTS: u32 = 10;
    pub const WRONG_PENALTY: u32 = 5;
    /// Chance the goal color re-rolls after a correct tap
    pub const GOAL_REROLL_CHANCE: f64 = 0.3;
}
