//! Per-tick systems and task handlers for the encounter engine.

pub mod boss;
pub mod choreographer;
pub mod cleanup;
pub mod combat;
pub mod director;
pub mod gunnery;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;
