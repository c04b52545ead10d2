//! Enumeration types used throughout the encounter engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Enemy ship archetype. Behavior and stats come from the profile table;
/// the archetype itself is just a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Fast unarmed rusher.
    Dart,
    /// Standard descender with forward guns.
    Striker,
    /// Descender with aimed fire.
    Raider,
    /// Light zigzagger.
    Wasp,
    /// Zigzagger with forward guns.
    Hornet,
    /// Zigzagger with aimed fire.
    Viper,
    /// Fast elite rusher.
    Falcon,
    /// Elite gunship.
    Reaper,
    /// Orbital attacker, fights in spinner packs.
    Spinner,
    Gyre,
    Vortex,
    /// Squadron leader, coordinates split attacks.
    Commander,
    Warlord,
    /// Heavy ordnance carrier.
    Bomber,
    /// Slow bulk hauler, high point value.
    Hauler,
    /// Heavy gunship.
    Devastator,
    /// Armored hull, survives one extra hit.
    Bulwark,
    Juggernaut,
    /// Proximity mine, detonates near the player.
    Mine,
    /// Weaving hunter with aimed fire.
    Seeker,
    /// Docks mid-field and fires a burst before retreating.
    Sentry,
    Warden,
    /// Teleports once mid-descent.
    Phantom,
    Specter,
    /// Ricochets off the field walls.
    Bouncer,
    Pinball,
    /// Crosses the field horizontally.
    Sweeper,
    Scythe,
    /// Fast lance rusher.
    Lancer,
    /// Drifting skirmisher.
    Shade,
    Drifter,
    /// Heavy raider with aimed fire.
    Marauder,
    /// Side-crossing gunship.
    Interdictor,
    Ravager,
}

/// Spatial arrangement of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormationPattern {
    VShape,
    Line,
    Arc,
    Arrow,
    Diamond,
    Box,
    Circle,
    Cross,
}

/// Attack run curve flown when an enemy leaves its formation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackPatternKind {
    /// Monotonic descent with a lateral wiggle.
    Dive,
    /// Full circle below the start, then a straight drop.
    Loop,
    /// Wide S-curve to one side.
    Swoop,
    /// Tightening downward corkscrew.
    Spiral,
    /// Triple lateral oscillation on the way down.
    Wave,
}

/// Coordination style a formation uses when it attacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormationGroup {
    /// One member launches every 0.6s, cycling dive/loop/swoop.
    #[default]
    Assault,
    /// Tight 0.2s stagger, dive/loop only.
    Elite,
    /// Members orbit the formation centroid, then spiral down together.
    Spinner,
    /// Two halves launch 1.0s apart on the wave pattern.
    Commander,
    /// 0.3s stagger, dive only.
    Scout,
    /// 0.8s stagger, alternating dive/swoop.
    Bomber,
}

/// Boss projectile volley geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossAttackPattern {
    /// Fan of shots centered straight down.
    Spread,
    /// Full ring of shots.
    Ring,
    /// Burst aimed at the player (straight down when no player position).
    AimedBurst,
    /// Shots at random offsets across the boss footprint.
    Rain,
    /// Two opposed arms rotating between volleys.
    Helix,
}

/// Encounter progression state for one level playthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterState {
    /// Waves are still being spawned.
    #[default]
    SpawningWaves,
    /// All waves spawned; waiting for the field to stay clear.
    AwaitingClear,
    /// Fixed warning period before the boss appears.
    BossWarning,
    /// Boss is on the field.
    BossFight,
    /// Boss defeated, level over.
    Complete,
}

/// Boss lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Descending to the resting line. Cannot be damaged or defeated.
    #[default]
    Entering,
    /// Patrolling and firing.
    Active,
    /// Health reached zero; defeat sequence running.
    Defeated,
}

/// Who fired a projectile. Everything here is a hazard to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOrigin {
    Enemy,
    Boss,
    /// Radial fragment from a mine detonation.
    Shrapnel,
}

/// Movement program state for a free-flying enemy.
///
/// Tagged variants carry the per-entity state the program needs. Programs
/// are stepped by the behavior crate; entities holding a formation slot or
/// following a path are not stepped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "program")]
pub enum MoveState {
    /// Straight descent.
    Descend,
    /// Diagonal descent, flipping direction at the walls.
    Zigzag { dir: f32 },
    /// Horizontal crossing with a slight downward drift.
    Sweep { dir: f32 },
    /// Descend to the dock line, hold and fire, then retreat upward.
    Dock { fired: bool },
    /// Slow drift; arms after a delay, then detonates near the player.
    MineDrift { armed: bool },
    /// Descend, jump once to a random column, keep descending.
    Teleport { jumped: bool },
    /// Steep diagonal descent, ricocheting off the walls.
    Bounce { dir: f32 },
    /// Sinusoidal lateral drift on the way down.
    Waver,
    /// Circle a fixed point. Used by spinner formations before their
    /// synchronized spiral attack; never completes on its own.
    Orbit { center: Vec2, phase: f32 },
}

/// What a followed path does when it runs out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathMode {
    /// Formation entry flight: snap to the slot and take formation.
    EntryTo(Vec2),
    /// Attack run: the enemy leaves the field at the end.
    AttackRun,
}
