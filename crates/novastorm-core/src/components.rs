//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// World position (field units, y-up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity (field units per virtual second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Marks an entity as a regular enemy. The boss does not carry this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Hit points. `current` never drops below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Liveness and formation membership flags.
///
/// `destroyed` is set exactly once (first writer wins) by either the combat
/// resolver or the movement system when the entity leaves the field. Every
/// deferred effect re-checks it at fire time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifecycle {
    pub destroyed: bool,
    pub in_formation: bool,
    /// Owning formation id, if this enemy was spawned into one.
    pub formation: Option<u32>,
}

/// Archetype tag plus the running movement program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorState {
    pub archetype: EnemyArchetype,
    pub move_state: MoveState,
    /// Seconds spent in the current `move_state` (virtual time).
    pub state_secs: f32,
}

/// Boss encounter state, flat on the boss entity. Health is a separate
/// component so the combat resolver treats boss and enemies uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossState {
    pub phase: BossPhase,
    /// Horizontal patrol direction, +1 right / -1 left.
    pub patrol_dir: f32,
    /// Patrol line the boss descends to.
    pub rest_y: f32,
    pub speed: f32,
    /// Footprint radius for the host collider.
    pub size: f32,
    pub points: u32,
    /// Rotation accumulator for the helix volley.
    pub helix_phase: f32,
}

/// Enemy or boss shot. Moves ballistically until it leaves the field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: ProjectileOrigin,
}

/// Constant-duration waypoint interpolation along a precomputed curve.
/// While present, the movement programs do not run for this entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollow {
    pub waypoints: Vec<Vec2>,
    /// Seconds elapsed along the path (virtual time).
    pub elapsed: f32,
    /// Total flight time for the whole path.
    pub duration: f32,
    pub mode: PathMode,
}

impl PathFollow {
    pub fn new(waypoints: Vec<Vec2>, duration: f32, mode: PathMode) -> Self {
        Self {
            waypoints,
            elapsed: 0.0,
            duration,
            mode,
        }
    }
}
