//! Contact events reported by the host's collision broad-phase.
//!
//! The host detects overlaps using the positions and sizes in the snapshot,
//! then reports them as typed pairs. Events are queued and resolved at the
//! start of the next update. Ids that no longer name a live entity are
//! silently dropped.

use serde::{Deserialize, Serialize};

/// A typed contact pair. Ids are the public `u64` entity ids
/// from the snapshot views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContactEvent {
    /// A player shot hit a regular enemy.
    ShotHitEnemy { enemy_id: u64 },
    /// A player shot hit the boss.
    ShotHitBoss { boss_id: u64 },
    /// The player's ship touched a regular enemy.
    PlayerTouchedEnemy { enemy_id: u64 },
    /// An enemy, boss, or shrapnel projectile hit the player's ship.
    HazardHitPlayer { hazard_id: u64 },
}
