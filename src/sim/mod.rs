//! Deterministic session simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through explicit `tick(dt)` calls
//! - Seeded RNG only
//! - Stable iteration order (targets kept in spawn order)
//! - No rendering or platform dependencies

pub mod color;
pub mod session;
pub mod spawner;
pub mod target;

pub use color::{ColorId, PALETTE, display_rgb};
pub use session::{Phase, SessionController};
pub use spawner::{SpawnBounds, Spawner, TargetSpec};
pub use target::Target;
