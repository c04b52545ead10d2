//! Procedural geometry for NOVASTORM.
//!
//! Formation slot layouts and attack-run curves as pure functions.
//! No state beyond an explicit RNG argument where a curve calls for
//! randomness.

pub mod attack;
pub mod formation;

pub use attack::{attack_path, entry_path};
pub use formation::layout_positions;
