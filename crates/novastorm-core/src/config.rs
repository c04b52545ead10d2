//! Encounter configuration: engine setup and authored level data.
//!
//! All of this is serde data, so a host can supply its own level tables
//! instead of the built-in ones.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::FieldSize;

/// Configuration for starting a new encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Level number, 1-based. Selects the built-in wave and boss tables.
    pub level: u32,
    /// RNG seed for determinism. Same seed = same encounter.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Play field dimensions.
    pub field: FieldSize,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            level: 1,
            seed: 42,
            time_scale: 1.0,
            field: FieldSize::default(),
        }
    }
}

/// One wave of enemies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveDescriptor {
    /// Archetypes in spawn order. For a formation wave they fill slots
    /// in slot order, cycling if the formation has more slots.
    pub members: Vec<EnemyArchetype>,
    /// Seconds before the first spawn, counted from the end of the
    /// previous wave's spawning.
    pub spawn_delay: f32,
    /// Seconds between member spawns within the wave.
    pub spawn_interval: f32,
    /// When set, the whole wave enters as a formation instead of
    /// spawning free-flying members.
    pub formation: Option<FormationDescriptor>,
}

/// Shape and timing of a formation wave. The coordination rules come from
/// the member archetypes (the lead member's group decides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationDescriptor {
    pub pattern: FormationPattern,
    /// Number of slots. Zero degrades to an empty formation that spawns
    /// nothing.
    pub count: usize,
    /// Distance between adjacent slots.
    pub spacing: f32,
    /// Seconds between full assembly and the attack.
    pub attack_delay: f32,
}

/// Per-level boss parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossConfig {
    pub max_health: i32,
    /// Horizontal patrol speed.
    pub speed: f32,
    /// Footprint radius.
    pub size: f32,
    /// Unlocked volley patterns, each run on its own repeating timer.
    pub patterns: Vec<BossAttackPattern>,
    pub points: u32,
}

/// Everything that defines one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: u32,
    pub waves: Vec<WaveDescriptor>,
    pub boss: BossConfig,
}
