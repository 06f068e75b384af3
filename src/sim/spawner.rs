//! Time-driven target spawner with a one-way difficulty ramp

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::ColorId;
use crate::consts::{
    SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_START, SPAWN_INTERVAL_STEP, SPAWN_MAX_X, SPAWN_MAX_Y,
    SPAWN_MIN_X, SPAWN_MIN_Y,
};

/// Rectangle targets spawn inside (fixed configuration, never mutated)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self {
            min_x: SPAWN_MIN_X,
            max_x: SPAWN_MAX_X,
            min_y: SPAWN_MIN_Y,
            max_y: SPAWN_MAX_Y,
        }
    }
}

impl SpawnBounds {
    /// Uniform random position inside the rectangle
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.random_range(self.min_x..=self.max_x),
            rng.random_range(self.min_y..=self.max_y),
        )
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// Everything needed to instantiate one target
#[derive(Debug, Clone, Copy)]
pub struct TargetSpec {
    pub pos: Vec2,
    pub color: ColorId,
    pub is_goal: bool,
}

/// Decides when and where the next target appears
///
/// The spawn interval only shrinks while a session runs; `reset` restores
/// it for the next session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds between spawns, clamped to `[min_interval, start_interval]`
    pub interval: f32,
    /// Seconds accumulated toward the next spawn
    pub timer: f32,
    pub bounds: SpawnBounds,
    start_interval: f32,
    min_interval: f32,
    step: f32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SpawnBounds::default())
    }
}

impl Spawner {
    pub fn new(bounds: SpawnBounds) -> Self {
        Self::with_ramp(
            bounds,
            SPAWN_INTERVAL_START,
            SPAWN_INTERVAL_MIN,
            SPAWN_INTERVAL_STEP,
        )
    }

    /// Spawner with a custom ramp (start interval, floor, shrink per spawn)
    pub fn with_ramp(bounds: SpawnBounds, start: f32, min: f32, step: f32) -> Self {
        Self {
            interval: start,
            timer: 0.0,
            bounds,
            start_interval: start,
            min_interval: min,
            step,
        }
    }

    /// Accumulate `dt`; yields a spec when the interval elapses
    ///
    /// Firing resets the timer to zero and steps the interval down by one
    /// ramp increment, floored at `min_interval`.
    pub fn tick<R: Rng>(&mut self, dt: f32, goal: ColorId, rng: &mut R) -> Option<TargetSpec> {
        self.timer += dt;
        if self.timer < self.interval {
            return None;
        }
        self.timer = 0.0;
        self.interval = (self.interval - self.step).max(self.min_interval);

        let color = ColorId::random(rng);
        Some(TargetSpec {
            pos: self.bounds.sample(rng),
            color,
            is_goal: color == goal,
        })
    }

    /// Restore the start-of-session interval
    pub fn reset(&mut self) {
        self.interval = self.start_interval;
        self.timer = 0.0;
    }
}
