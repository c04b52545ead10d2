//! Events emitted by the engine for host feedback.
//!
//! Drained into each snapshot. Entity ids are the public `u64` form used
//! throughout the snapshot views.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One observable thing that happened during an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy entered the field.
    EnemySpawned { id: u64, archetype: EnemyArchetype },
    /// An enemy was destroyed in combat. `points` is the awarded value
    /// after the score multiplier.
    EnemyDestroyed {
        id: u64,
        archetype: EnemyArchetype,
        points: u32,
    },
    /// An enemy survived a hit (armored hull).
    EnemyDamaged { id: u64, remaining: i32 },
    /// An enemy left the field alive. No points.
    EnemyEscaped { id: u64 },
    /// A mine detonated, either shot or triggered by proximity.
    MineDetonated { id: u64, position: Vec2 },
    /// A wave began spawning.
    WaveStarted { index: usize },
    /// Every member of a formation reached its slot (or died trying).
    FormationAssembled { formation: u32 },
    /// A formation began its attack.
    FormationAttack { formation: u32 },
    /// The encounter progression state changed.
    StateChanged { state: EncounterState },
    /// The pre-boss warning period began.
    BossWarningStarted,
    /// The boss entered the field.
    BossSpawned { max_health: i32 },
    /// The boss survived a hit.
    BossDamaged { remaining: i32 },
    /// The boss changed lifecycle phase.
    BossPhaseChanged { phase: BossPhase },
    /// One destruction pulse of the defeat sequence.
    BossDefeatPulse { position: Vec2 },
    /// The boss was destroyed. Fires exactly once per encounter.
    BossDefeated { points: u32 },
    /// The player lost a life.
    PlayerHit { lives_remaining: u32 },
    /// A shield or invulnerability window absorbed a hit.
    ShieldAbsorbed,
    /// The level is over.
    EncounterComplete { level: u32 },
}
