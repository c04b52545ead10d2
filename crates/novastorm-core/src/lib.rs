//! Core types and definitions for the NOVASTORM encounter engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, contact events, snapshot views, and constants.
//! It has no dependency on any ECS runtime or host framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod contacts;
pub mod enums;
pub mod events;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod tests;
