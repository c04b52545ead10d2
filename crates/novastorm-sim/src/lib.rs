//! Deterministic combat-encounter engine for a vertical-scrolling shooter.
//!
//! The engine is headless: it owns enemy waves, formations, attack runs,
//! enemy fire, the boss encounter, and level progression, and exposes the
//! result as one serializable snapshot per update. The host owns
//! rendering, input, and collision detection; overlaps come back in as
//! [`novastorm_core::contacts::ContactEvent`]s.
//!
//! Same seed, same level, same update cadence, same contact reports —
//! same snapshots, byte for byte.

pub mod clock;
pub mod engine;
pub mod formation;
pub mod levels;
pub mod systems;
pub mod world_setup;

pub use engine::{EncounterEngine, Task};
pub use novastorm_core as core;

#[cfg(test)]
mod tests;
