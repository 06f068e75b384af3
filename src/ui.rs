//! Host-facing sink traits
//!
//! Rendering, labels, and input plumbing live outside the core. The session
//! reaches them through these traits, addressing targets by their `u32`
//! handle. Both sinks are optional on the controller: when one is not wired
//! up its calls are skipped and the state machine runs unchanged.

use crate::sim::ColorId;

/// Visual lifecycle of individual targets
pub trait PresentationSink {
    /// A target was created; play its entrance
    fn show_entrance(&mut self, target: u32);
    /// A target was tapped; play its exit
    fn show_exit(&mut self, target: u32);
    /// Pulsing end-of-life warning, `intensity` in [0, 1]
    fn set_fade_intensity(&mut self, target: u32, intensity: f32);
    /// Assign the target's display color
    fn set_color(&mut self, target: u32, color: ColorId);
    /// The target left the session; drop its visuals
    fn discard(&mut self, target: u32);
}

/// HUD labels and panels
pub trait DisplaySink {
    fn update_score(&mut self, score: u32);
    fn update_time_remaining(&mut self, seconds: f32);
    fn update_goal_color(&mut self, color: ColorId);
    /// Session (re)started; hide any end-of-game overlay
    fn show_active_panel(&mut self);
    /// Session over; present the final score
    fn show_end_panel(&mut self, final_score: u32);
}
