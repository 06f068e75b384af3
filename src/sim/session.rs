//! Session orchestration: phase machine, countdown, scoring, goal rotation
//!
//! `SessionController` owns the spawner and every live target. The host
//! drives it with `tick(dt)` once per frame, routes tap events to `tap(id)`,
//! and wires its restart control to `restart()`. All mutation happens
//! synchronously inside those calls; taps delivered between ticks land
//! before the next advance pass.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::color::ColorId;
use super::spawner::Spawner;
use super::target::Target;
use crate::config::SessionConfig;
use crate::ui::{DisplaySink, PresentationSink};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Constructed, never started
    #[default]
    Idle,
    /// Countdown running, targets spawning
    Active,
    /// Time expired, awaiting restart
    Ended,
}

/// The session state machine
pub struct SessionController {
    pub phase: Phase,
    /// Seconds of session time consumed, clamped to the configured duration
    pub elapsed: f32,
    pub score: u32,
    pub goal_color: ColorId,
    /// Live, unresolved targets in spawn order
    pub targets: Vec<Target>,
    pub spawner: Spawner,
    pub config: SessionConfig,
    rng: Pcg32,
    next_id: u32,
    presentation: Option<Box<dyn PresentationSink>>,
    display: Option<Box<dyn DisplaySink>>,
}

impl SessionController {
    /// Create an idle session with a seeded RNG
    ///
    /// All randomness (spawn position, spawn color, goal re-rolls) flows
    /// through this one generator, so a seed fixes the whole run.
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let goal_color = ColorId::random(&mut rng);
        let spawner = Spawner::with_ramp(
            config.spawn_bounds,
            config.spawn_interval_start,
            config.spawn_interval_min,
            config.spawn_interval_step,
        );
        Self {
            phase: Phase::Idle,
            elapsed: 0.0,
            score: 0,
            goal_color,
            targets: Vec::new(),
            spawner,
            config,
            rng,
            next_id: 1,
            presentation: None,
            display: None,
        }
    }

    pub fn attach_presentation(&mut self, sink: Box<dyn PresentationSink>) {
        self.presentation = Some(sink);
    }

    pub fn attach_display(&mut self, sink: Box<dyn DisplaySink>) {
        self.display = Some(sink);
    }

    /// Begin a fresh session: zero the clock and score, restore the spawn
    /// ramp, discard residual targets, and roll a new goal color.
    pub fn start(&mut self) {
        self.phase = Phase::Active;
        self.elapsed = 0.0;
        self.score = 0;
        self.spawner.reset();
        self.goal_color = ColorId::random(&mut self.rng);
        self.clear_targets();

        log::info!("session started, goal color {}", self.goal_color.name());
        if let Some(d) = self.display.as_deref_mut() {
            d.update_score(0);
            d.update_time_remaining(self.config.session_duration);
            d.update_goal_color(self.goal_color);
            d.show_active_panel();
        }
    }

    /// Re-entry from the end panel; identical to `start`
    pub fn restart(&mut self) {
        self.start();
    }

    /// Advance the session by one frame
    pub fn tick(&mut self, dt: f32) {
        if self.phase != Phase::Active {
            return;
        }

        self.elapsed += dt;
        let remaining = (self.config.session_duration - self.elapsed).max(0.0);
        if let Some(d) = self.display.as_deref_mut() {
            d.update_time_remaining(remaining);
        }

        if self.elapsed >= self.config.session_duration {
            self.elapsed = self.config.session_duration;
            self.end();
            return;
        }

        // Spawn pass
        if let Some(spec) = self.spawner.tick(dt, self.goal_color, &mut self.rng) {
            let id = self.next_entity_id();
            let target = Target::new(id, &spec, self.config.target_lifetime);
            log::debug!(
                "spawned target {id} ({}) at ({:.0}, {:.0})",
                target.color.name(),
                target.pos.x,
                target.pos.y
            );
            if let Some(p) = self.presentation.as_deref_mut() {
                p.set_color(id, target.color);
                p.show_entrance(id);
            }
            self.targets.push(target);
        }

        // Advance pass: age every live target, emit fade warnings, prune
        // expired ones. Index-based so removal never skips an unvisited
        // target. Expired targets report no tap outcome.
        let mut i = 0;
        while i < self.targets.len() {
            self.targets[i].advance(dt);
            if self.targets[i].is_expired() {
                let mut target = self.targets.remove(i);
                target.expire();
                log::debug!("target {} expired", target.id);
                if let Some(p) = self.presentation.as_deref_mut() {
                    p.discard(target.id);
                }
            } else {
                if let Some(alpha) = self.targets[i].fade_intensity() {
                    let id = self.targets[i].id;
                    if let Some(p) = self.presentation.as_deref_mut() {
                        p.set_fade_intensity(id, alpha);
                    }
                }
                i += 1;
            }
        }
    }

    /// Resolve a tap on the target with the given handle
    ///
    /// Ignored outside the Active phase, for unknown handles, and for
    /// targets already resolved or expired. A tapped target is removed
    /// immediately, so a tap in the same frame as expiry wins.
    pub fn tap(&mut self, target_id: u32) {
        if self.phase != Phase::Active {
            return;
        }
        let Some(idx) = self.targets.iter().position(|t| t.id == target_id) else {
            return;
        };
        let Some(is_goal) = self.targets[idx].tap() else {
            return;
        };
        let target = self.targets.remove(idx);
        if let Some(p) = self.presentation.as_deref_mut() {
            p.show_exit(target.id);
            p.discard(target.id);
        }
        self.resolve_outcome(is_goal);
    }

    /// Apply one tap outcome to the score and possibly rotate the goal
    fn resolve_outcome(&mut self, is_goal: bool) {
        if is_goal {
            self.score += self.config.correct_points;
            if self.rng.random_bool(self.config.goal_reroll_chance) {
                // May land on the incumbent color; still re-announced
                self.goal_color = ColorId::random(&mut self.rng);
                log::debug!("goal color re-rolled to {}", self.goal_color.name());
                if let Some(d) = self.display.as_deref_mut() {
                    d.update_goal_color(self.goal_color);
                }
            }
        } else {
            self.score = self.score.saturating_sub(self.config.wrong_penalty);
        }
        if let Some(d) = self.display.as_deref_mut() {
            d.update_score(self.score);
        }
    }

    fn end(&mut self) {
        self.phase = Phase::Ended;
        self.clear_targets();
        log::info!("session ended with score {}", self.score);
        if let Some(d) = self.display.as_deref_mut() {
            d.show_end_panel(self.score);
        }
    }

    fn clear_targets(&mut self) {
        for target in self.targets.drain(..) {
            if let Some(p) = self.presentation.as_deref_mut() {
                p.discard(target.id);
            }
        }
    }

    /// Allocate a target handle
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
