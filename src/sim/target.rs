//! Target lifecycle: aging, fade warning, expiry, tap resolution

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::ColorId;
use super::spawner::TargetSpec;
use crate::consts::{FADE_PULSE_RATE, FADE_WINDOW_FRAC};

/// A spawned circle the player may tap
///
/// A target resolves exactly once, by tap or by expiry. Once resolved (or
/// once its age reaches `max_lifetime`) it is inert: `advance` and `tap`
/// are no-ops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Handle the host uses to address this target's visuals
    pub id: u32,
    pub pos: Vec2,
    pub color: ColorId,
    /// Whether `color` matched the goal color at spawn time
    pub is_goal: bool,
    /// Seconds since spawn
    pub age: f32,
    pub max_lifetime: f32,
    resolved: bool,
}

impl Target {
    pub fn new(id: u32, spec: &TargetSpec, max_lifetime: f32) -> Self {
        Self {
            id,
            pos: spec.pos,
            color: spec.color,
            is_goal: spec.is_goal,
            age: 0.0,
            max_lifetime,
            resolved: false,
        }
    }

    /// Age the target by `dt`. Frozen once resolved or expired.
    pub fn advance(&mut self, dt: f32) {
        if self.resolved || self.is_expired() {
            return;
        }
        self.age += dt;
    }

    /// Pulsing end-of-life alpha, present only in the trailing fade window
    ///
    /// Purely presentational; expiry is a function of age alone and does not
    /// depend on whether the fade is rendered.
    pub fn fade_intensity(&self) -> Option<f32> {
        if self.resolved || self.age <= FADE_WINDOW_FRAC * self.max_lifetime {
            return None;
        }
        Some(0.5 + 0.5 * (self.age * FADE_PULSE_RATE).sin())
    }

    /// Whether the target outlived its lifetime
    pub fn is_expired(&self) -> bool {
        self.age >= self.max_lifetime
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Resolve by tap
    ///
    /// Returns the goal flag the first time only; `None` on repeat taps or
    /// once the target has expired.
    pub fn tap(&mut self) -> Option<bool> {
        if self.resolved || self.is_expired() {
            return None;
        }
        self.resolved = true;
        Some(self.is_goal)
    }

    /// Resolve by expiry (expired targets report no tap outcome)
    pub(crate) fn expire(&mut self) {
        self.resolved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal_target() -> Target {
        let spec = TargetSpec {
            pos: Vec2::new(10.0, -20.0),
            color: ColorId::Green,
            is_goal: true,
        };
        Target::new(1, &spec, 3.0)
    }

    #[test]
    fn test_tap_resolves_once() {
        let mut target = goal_target();
        assert_eq!(target.tap(), Some(true));
        assert_eq!(target.tap(), None);
        assert!(target.is_resolved());
    }

    #[test]
    fn test_advance_frozen_after_tap() {
        let mut target = goal_target();
        target.advance(1.0);
        target.tap();
        target.advance(1.0);
        assert_eq!(target.age, 1.0);
    }

    #[test]
    fn test_expiry_freezes_age_and_tap() {
        let mut target = goal_target();
        target.advance(1.0);
        target.advance(1.0);
        target.advance(1.0);
        assert!(target.is_expired());
        target.advance(1.0);
        assert_eq!(target.age, 3.0);
        assert_eq!(target.tap(), None);
    }

    #[test]
    fn test_fade_only_in_trailing_window() {
        let mut target = goal_target();
        target.advance(1.0);
        assert!(target.fade_intensity().is_none());
        target.advance(1.5);
        let alpha = target.fade_intensity().expect("inside fade window");
        assert!((0.0..=1.0).contains(&alpha));
    }

    #[test]
    fn test_fade_suppressed_once_resolved() {
        let mut target = goal_target();
        target.advance(2.5);
        target.tap();
        assert!(target.fade_intensity().is_none());
    }
}
