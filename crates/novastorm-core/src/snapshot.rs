//! Encounter snapshot — the complete visible state returned from each update.
//!
//! Views are read-only projections of the world, sorted by id so identical
//! encounters serialize identically. The `u64` ids are the public entity
//! handles the host echoes back in contact events.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete encounter state for one update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub state: EncounterState,
    pub level: u32,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub boss: Option<BossView>,
    pub formations: Vec<FormationView>,
    pub player: PlayerView,
    /// Everything that happened this update, in occurrence order.
    pub events: Vec<GameEvent>,
}

/// A live regular enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub archetype: EnemyArchetype,
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: i32,
    /// Footprint radius for the host collider.
    pub size: f32,
    pub in_formation: bool,
}

/// A live hazard projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub origin: ProjectileOrigin,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// The boss, when on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub id: u64,
    pub phase: BossPhase,
    pub position: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub size: f32,
}

/// An active formation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationView {
    pub id: u32,
    pub pattern: FormationPattern,
    pub group: FormationGroup,
    pub members_alive: usize,
    pub assembled: bool,
    pub attacked: bool,
}

/// Player-facing status owned by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub lives: u32,
    pub score: u64,
    pub score_multiplier: u32,
    pub shield: bool,
    pub invulnerable: bool,
}
