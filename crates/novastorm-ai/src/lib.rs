//! Enemy behavior for NOVASTORM.
//!
//! Implements movement program state machines and the archetype stat
//! profiles that drive them.

pub mod fsm;
pub mod profiles;

pub use novastorm_core as core;
